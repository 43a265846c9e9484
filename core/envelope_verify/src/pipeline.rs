// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/pipeline.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Verification pipeline - load envelope, parse, materialize artifacts, run the backend, build the report

use std::path::Path;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::artifacts::ArtifactWorkspace;
use crate::config::VerifierConfig;
use crate::envelope::SignedEnvelope;
use crate::errors::EnvelopeError;
use crate::loader::load_envelope_text;
use crate::report::VerificationReport;
use crate::verifier::{build_verifier, SignatureVerifier, VerificationRequest};

/// Runs the whole check for one envelope file
pub struct EnvelopeVerifier {
    config: VerifierConfig,
    backend: Box<dyn SignatureVerifier>,
}

impl EnvelopeVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        let backend = build_verifier(&config);
        Self { config, backend }
    }

    /// Use a custom backend instead of the one named in the configuration
    pub fn with_backend(config: VerifierConfig, backend: Box<dyn SignatureVerifier>) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify the envelope at `path`.
    ///
    /// Malformed input fails before any artifact is written or any backend
    /// runs. A signature that does not verify yields `Ok` with
    /// `verified == false`.
    pub fn verify_file(&self, path: &Path) -> Result<VerificationReport, EnvelopeError> {
        info!("Verifying envelope {:?}", path);
        let text = load_envelope_text(path)?;
        self.verify_text(&text)
    }

    pub fn verify_text(&self, text: &str) -> Result<VerificationReport, EnvelopeError> {
        let envelope = SignedEnvelope::parse(text)?;
        let payload = envelope.payload_bytes(self.config.payload_mode)?;
        let signature = envelope.signature_bytes()?;
        let payload_sha256 = hex::encode(Sha256::digest(&payload));

        let workspace = ArtifactWorkspace::prepare(&self.config.artifacts)?;
        let artifacts = workspace.materialize(&payload, &signature)?;

        let request = VerificationRequest {
            public_key: &self.config.public_key_path,
            signature_path: &artifacts.signature_path,
            data_path: &artifacts.data_path,
        };
        let outcome = self.backend.verify(&request)?;

        info!(
            "Envelope verification finished: verified={}, backend={}, payload_sha256={}",
            outcome.is_verified(),
            self.backend.backend(),
            payload_sha256
        );

        Ok(VerificationReport::new(
            &outcome,
            self.backend.backend(),
            self.config.payload_mode,
            &artifacts,
            payload_sha256,
        ))
    }
}
