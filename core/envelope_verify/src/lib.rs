// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/lib.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Library root - detached RSA-PSS/SHA-256 verification of JSON signed envelopes

pub mod artifacts;
pub mod canonical;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod keys;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use artifacts::{ArtifactWorkspace, MaterializedArtifacts};
pub use canonical::{canonical_json, SignerJsonFormatter};
pub use config::{ArtifactLocation, Backend, OutputFormat, PayloadMode, VerifierConfig};
pub use envelope::{decode_signature_hex, SignedEnvelope};
pub use errors::EnvelopeError;
pub use pipeline::EnvelopeVerifier;
pub use report::VerificationReport;
pub use verifier::{
    NativeVerifier, OpensslVerifier, SignatureVerifier, VerificationOutcome, VerificationRequest,
};
