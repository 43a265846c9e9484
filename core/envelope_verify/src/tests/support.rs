// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/tests/support.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Shared test helpers - fixture paths, RSA-PSS signing with the fixture key, openssl detection

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use ring::rand::SystemRandom;
use ring::signature::{RsaKeyPair, RSA_PSS_SHA256};

use crate::config::{ArtifactLocation, Backend, VerifierConfig};

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_text(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

pub fn signer_key_pair() -> RsaKeyPair {
    let der = std::fs::read(fixture("signer_private.pk8")).unwrap();
    RsaKeyPair::from_pkcs8(&der).unwrap()
}

/// RSA-PSS/SHA-256 signature over `payload` with the fixture signer key
pub fn sign_payload(payload: &[u8]) -> Vec<u8> {
    let key_pair = signer_key_pair();
    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(&RSA_PSS_SHA256, &SystemRandom::new(), payload, &mut signature)
        .unwrap();
    signature
}

/// Envelope text whose signature covers `signed_payload`
pub fn envelope_text(data_json: &str, signed_payload: &[u8]) -> String {
    format!(
        r#"{{"data": {}, "signature": "{}"}}"#,
        data_json,
        hex::encode(sign_payload(signed_payload))
    )
}

pub fn native_config(artifact_dir: &Path) -> VerifierConfig {
    VerifierConfig {
        public_key_path: fixture("sender_public_key.pem"),
        backend: Backend::Native,
        artifacts: ArtifactLocation::Directory(artifact_dir.to_path_buf()),
        ..VerifierConfig::default()
    }
}

pub fn openssl_available() -> bool {
    Command::new("openssl")
        .arg("version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
