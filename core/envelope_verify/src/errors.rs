// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/errors.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Error taxonomy for envelope loading, parsing, artifact materialization and signature verification

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the verification pipeline.
///
/// A signature that simply does not verify is NOT an error; it is reported as
/// `VerificationOutcome::Rejected`.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Failed to read envelope file {path:?}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Envelope is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Envelope must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("Envelope is missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Envelope field 'signature' must be a string, found {0}")]
    SignatureNotString(&'static str),
    #[error("Signature is not valid hex: {0}")]
    InvalidSignatureHex(#[from] hex::FromHexError),
    #[error("Failed to serialize payload: {0}")]
    PayloadSerialization(String),
    #[error("Failed to write artifact {path:?}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read artifact {path:?}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Public key error: {0}")]
    PublicKey(String),
    #[error("Failed to launch verifier '{program}': {source}")]
    VerifierLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
