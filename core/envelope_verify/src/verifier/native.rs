// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/verifier/native.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: In-process RSA-PSS/SHA-256 verification of the materialized artifacts using ring

use std::fs;
use std::path::Path;
use ring::signature::{UnparsedPublicKey, RSA_PSS_2048_8192_SHA256};
use tracing::{debug, info, warn};

use super::{SignatureVerifier, VerificationOutcome, VerificationRequest};
use crate::config::Backend;
use crate::errors::EnvelopeError;
use crate::keys::load_rsa_public_key;

pub const VERIFIED_MESSAGE: &str = "Verified OK\n";
pub const REJECTED_MESSAGE: &str = "Verification failure\n";

/// ring backend. Accepts 2048-8192 bit keys and PSS salts equal to the digest length.
#[derive(Debug, Default)]
pub struct NativeVerifier;

impl NativeVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Check `signature` over `payload` with a PKCS#1 DER public key
    pub fn verify_bytes(public_key_der: &[u8], payload: &[u8], signature: &[u8]) -> bool {
        let public_key = UnparsedPublicKey::new(&RSA_PSS_2048_8192_SHA256, public_key_der);
        public_key.verify(payload, signature).is_ok()
    }
}

impl SignatureVerifier for NativeVerifier {
    fn backend(&self) -> Backend {
        Backend::Native
    }

    fn verify(&self, request: &VerificationRequest<'_>) -> Result<VerificationOutcome, EnvelopeError> {
        let public_key = load_rsa_public_key(request.public_key)?;
        let payload = read_artifact(request.data_path)?;
        let signature = read_artifact(request.signature_path)?;

        debug!(
            "Native verification: payload={} bytes, signature={} bytes",
            payload.len(),
            signature.len()
        );

        if Self::verify_bytes(&public_key, &payload, &signature) {
            info!("RSA-PSS signature verified");
            Ok(VerificationOutcome::Verified(VERIFIED_MESSAGE.to_string()))
        } else {
            warn!("RSA-PSS signature rejected");
            Ok(VerificationOutcome::Rejected(REJECTED_MESSAGE.to_string()))
        }
    }
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, EnvelopeError> {
    fs::read(path).map_err(|e| EnvelopeError::ArtifactRead {
        path: path.to_path_buf(),
        source: e,
    })
}
