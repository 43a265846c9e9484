// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/envelope.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Signed envelope parsing - extracts the data payload and the hex signature, decodes signature bytes

use std::collections::HashMap;
use serde_json::value::RawValue;
use serde_json::Value;
use tracing::debug;

use crate::canonical::canonical_json;
use crate::config::PayloadMode;
use crate::errors::{json_type_name, EnvelopeError};

pub const DATA_FIELD: &str = "data";
pub const SIGNATURE_FIELD: &str = "signature";

/// Parsed `{"data": ..., "signature": "<hex>"}` document
#[derive(Debug, Clone)]
pub struct SignedEnvelope {
    data: Value,
    raw_data: String,
    signature_hex: String,
}

impl SignedEnvelope {
    /// Parse envelope text. Only key presence and the signature's type are checked.
    pub fn parse(text: &str) -> Result<Self, EnvelopeError> {
        let document: Value = serde_json::from_str(text)?;
        let mut fields = match document {
            Value::Object(fields) => fields,
            other => return Err(EnvelopeError::NotAnObject(json_type_name(&other))),
        };

        let data = fields
            .remove(DATA_FIELD)
            .ok_or(EnvelopeError::MissingField(DATA_FIELD))?;
        let signature_hex = match fields.remove(SIGNATURE_FIELD) {
            Some(Value::String(hex)) => hex,
            Some(other) => return Err(EnvelopeError::SignatureNotString(json_type_name(&other))),
            None => return Err(EnvelopeError::MissingField(SIGNATURE_FIELD)),
        };

        // Second pass keeps the verbatim text of `data` for raw payload mode.
        // Duplicate keys resolve to the last occurrence, same as the parsed value.
        let raw_fields: HashMap<String, &RawValue> = serde_json::from_str(text)?;
        let raw_data = raw_fields
            .get(DATA_FIELD)
            .map(|raw| raw.get().to_string())
            .ok_or(EnvelopeError::MissingField(DATA_FIELD))?;

        debug!(
            "Parsed envelope: data type={}, signature hex length={}",
            json_type_name(&data),
            signature_hex.len()
        );

        Ok(Self {
            data,
            raw_data,
            signature_hex,
        })
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Source text of `data` exactly as it appeared in the envelope
    pub fn raw_data(&self) -> &str {
        &self.raw_data
    }

    pub fn signature_hex(&self) -> &str {
        &self.signature_hex
    }

    /// Bytes the signature is checked against
    pub fn payload_bytes(&self, mode: PayloadMode) -> Result<Vec<u8>, EnvelopeError> {
        match mode {
            PayloadMode::Canonical => canonical_json(&self.data),
            PayloadMode::Raw => Ok(self.raw_data.as_bytes().to_vec()),
        }
    }

    pub fn signature_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        decode_signature_hex(&self.signature_hex)
    }
}

/// Decode a hex signature. Whitespace may separate whole bytes; every group
/// must be even-length hex (either case).
pub fn decode_signature_hex(signature: &str) -> Result<Vec<u8>, EnvelopeError> {
    let mut bytes = Vec::with_capacity(signature.len() / 2);
    for group in signature.split_ascii_whitespace() {
        bytes.extend(hex::decode(group)?);
    }
    Ok(bytes)
}
