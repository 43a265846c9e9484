// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/verifier/openssl.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Delegates RSA-PSS/SHA-256 verification to `openssl dgst` and captures its verdict

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use super::{SignatureVerifier, VerificationOutcome, VerificationRequest};
use crate::config::Backend;
use crate::errors::EnvelopeError;

pub struct OpensslVerifier {
    program: PathBuf,
}

impl OpensslVerifier {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// `dgst -sha256 -verify <key> -signature <sig> -sigopt rsa_padding_mode:pss <data>`
    pub fn arguments(&self, request: &VerificationRequest<'_>) -> Vec<OsString> {
        vec![
            OsString::from("dgst"),
            OsString::from("-sha256"),
            OsString::from("-verify"),
            request.public_key.as_os_str().to_owned(),
            OsString::from("-signature"),
            request.signature_path.as_os_str().to_owned(),
            OsString::from("-sigopt"),
            OsString::from("rsa_padding_mode:pss"),
            request.data_path.as_os_str().to_owned(),
        ]
    }
}

impl SignatureVerifier for OpensslVerifier {
    fn backend(&self) -> Backend {
        Backend::Openssl
    }

    fn verify(&self, request: &VerificationRequest<'_>) -> Result<VerificationOutcome, EnvelopeError> {
        let args = self.arguments(request);
        debug!("Running {:?} {:?}", self.program, args);

        // No timeout: the run blocks until openssl exits
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| EnvelopeError::VerifierLaunch {
                program: self.program.display().to_string(),
                source: e,
            })?;

        if output.status.success() {
            info!("openssl reported a valid signature");
            Ok(VerificationOutcome::Verified(
                String::from_utf8_lossy(&output.stdout).into_owned(),
            ))
        } else {
            warn!("openssl rejected the signature (status {})", output.status);
            Ok(VerificationOutcome::Rejected(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ))
        }
    }
}
