// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/artifacts.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Materializes the payload and signature artifacts consumed by the verifier backends

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info};

use crate::config::{ArtifactLocation, DATA_ARTIFACT_NAME, SIGNATURE_ARTIFACT_NAME};
use crate::errors::EnvelopeError;

/// Directory that receives the artifacts for one run.
///
/// A scratch workspace owns its temporary directory; dropping the workspace
/// removes the artifacts.
#[derive(Debug)]
pub struct ArtifactWorkspace {
    dir: PathBuf,
    _scratch: Option<TempDir>,
}

/// Paths of the two files written for the verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedArtifacts {
    pub data_path: PathBuf,
    pub signature_path: PathBuf,
    pub payload_len: usize,
    pub signature_len: usize,
}

impl ArtifactWorkspace {
    pub fn prepare(location: &ArtifactLocation) -> Result<Self, EnvelopeError> {
        match location {
            ArtifactLocation::WorkingDir => Ok(Self {
                dir: PathBuf::new(),
                _scratch: None,
            }),
            ArtifactLocation::Directory(dir) => {
                fs::create_dir_all(dir).map_err(|e| EnvelopeError::ArtifactWrite {
                    path: dir.clone(),
                    source: e,
                })?;
                Ok(Self {
                    dir: dir.clone(),
                    _scratch: None,
                })
            }
            ArtifactLocation::Scratch => {
                let scratch = tempfile::Builder::new()
                    .prefix("envelope-verify-")
                    .tempdir()
                    .map_err(|e| EnvelopeError::ArtifactWrite {
                        path: std::env::temp_dir(),
                        source: e,
                    })?;
                debug!("Using scratch artifact directory {:?}", scratch.path());
                Ok(Self {
                    dir: scratch.path().to_path_buf(),
                    _scratch: Some(scratch),
                })
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_ARTIFACT_NAME)
    }

    pub fn signature_path(&self) -> PathBuf {
        self.dir.join(SIGNATURE_ARTIFACT_NAME)
    }

    /// Write both artifacts, replacing any previous content
    pub fn materialize(
        &self,
        payload: &[u8],
        signature: &[u8],
    ) -> Result<MaterializedArtifacts, EnvelopeError> {
        let data_path = self.data_path();
        write_artifact(&data_path, payload)?;

        let signature_path = self.signature_path();
        write_artifact(&signature_path, signature)?;

        info!(
            "Artifacts written: {:?} ({} bytes), {:?} ({} bytes)",
            data_path,
            payload.len(),
            signature_path,
            signature.len()
        );

        Ok(MaterializedArtifacts {
            data_path,
            signature_path,
            payload_len: payload.len(),
            signature_len: signature.len(),
        })
    }
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), EnvelopeError> {
    fs::write(path, bytes).map_err(|e| EnvelopeError::ArtifactWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
