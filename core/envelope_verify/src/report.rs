// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/report.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Verification report - console text rendering and structured JSON rendering

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::artifacts::MaterializedArtifacts;
use crate::config::{Backend, OutputFormat, PayloadMode};
use crate::errors::EnvelopeError;
use crate::verifier::VerificationOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub verified: bool,
    pub backend: Backend,
    pub payload_mode: PayloadMode,
    pub message: String,
    pub data_path: String,
    pub signature_path: String,
    pub signature_len: usize,
    /// Hex SHA-256 of the exact payload bytes checked
    pub payload_sha256: String,
    pub checked_at: DateTime<Utc>,
}

impl VerificationReport {
    pub fn new(
        outcome: &VerificationOutcome,
        backend: Backend,
        payload_mode: PayloadMode,
        artifacts: &MaterializedArtifacts,
        payload_sha256: String,
    ) -> Self {
        Self {
            verified: outcome.is_verified(),
            backend,
            payload_mode,
            message: outcome.message().to_string(),
            data_path: artifacts.data_path.display().to_string(),
            signature_path: artifacts.signature_path.display().to_string(),
            signature_len: artifacts.signature_len,
            payload_sha256,
            checked_at: Utc::now(),
        }
    }

    /// `Verification successful:` / `Verification failed:` followed by the backend's own output
    pub fn render_text(&self) -> String {
        let heading = if self.verified {
            "Verification successful:"
        } else {
            "Verification failed:"
        };
        format!("{}\n {}", heading, self.message)
    }

    pub fn render_json(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EnvelopeError::PayloadSerialization(e.to_string()))
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, EnvelopeError> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }
}
