// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/verifier/mod.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Signature verifier abstraction - RSA-PSS/SHA-256 over materialized artifacts, openssl or ring backend

use std::path::Path;

use crate::config::{Backend, VerifierConfig};
use crate::errors::EnvelopeError;

pub mod native;
pub mod openssl;

pub use native::NativeVerifier;
pub use openssl::OpensslVerifier;

/// Inputs handed to a backend: everything lives on disk
#[derive(Debug, Clone, Copy)]
pub struct VerificationRequest<'a> {
    pub public_key: &'a Path,
    pub signature_path: &'a Path,
    pub data_path: &'a Path,
}

/// Result of a completed check. A rejected signature is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified(String),
    Rejected(String),
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified(_))
    }

    pub fn message(&self) -> &str {
        match self {
            VerificationOutcome::Verified(message) | VerificationOutcome::Rejected(message) => message,
        }
    }
}

pub trait SignatureVerifier {
    fn backend(&self) -> Backend;

    fn verify(&self, request: &VerificationRequest<'_>) -> Result<VerificationOutcome, EnvelopeError>;
}

/// Build the backend selected by the configuration
pub fn build_verifier(config: &VerifierConfig) -> Box<dyn SignatureVerifier> {
    match config.backend {
        Backend::Openssl => Box::new(OpensslVerifier::new(config.openssl_program.clone())),
        Backend::Native => Box::new(NativeVerifier::new()),
    }
}
