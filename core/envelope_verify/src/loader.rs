// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/loader.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Reads the signed envelope file as UTF-8 text

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::EnvelopeError;

/// Read the full envelope file. Missing, unreadable and non-UTF-8 files all fail.
pub fn load_envelope_text(path: &Path) -> Result<String, EnvelopeError> {
    let text = fs::read_to_string(path).map_err(|e| EnvelopeError::InputUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Loaded envelope {:?}: {} bytes", path, text.len());
    Ok(text)
}
