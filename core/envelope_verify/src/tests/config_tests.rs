// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/tests/config_tests.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Tests for environment-driven verifier configuration

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use crate::config::*;
    use crate::errors::EnvelopeError;

    fn config_from(pairs: &[(&str, &str)]) -> Result<VerifierConfig, EnvelopeError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        VerifierConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_match_reference_layout() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.public_key_path, PathBuf::from("sender_public_key.pem"));
        assert_eq!(config.backend, Backend::Openssl);
        assert_eq!(config.openssl_program, PathBuf::from("openssl"));
        assert_eq!(config.payload_mode, PayloadMode::Canonical);
        assert_eq!(config.artifacts, ArtifactLocation::WorkingDir);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.strict_exit);
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            (ENV_PUBLIC_KEY, "/etc/keys/sender.pem"),
            (ENV_BACKEND, "Native"),
            (ENV_OPENSSL_BIN, "/usr/local/bin/openssl"),
            (ENV_PAYLOAD_MODE, "raw"),
            (ENV_ARTIFACT_DIR, "/tmp/artifacts"),
            (ENV_OUTPUT_FORMAT, "json"),
            (ENV_STRICT_EXIT, "true"),
        ])
        .unwrap();

        assert_eq!(config.public_key_path, PathBuf::from("/etc/keys/sender.pem"));
        assert_eq!(config.backend, Backend::Native);
        assert_eq!(config.openssl_program, PathBuf::from("/usr/local/bin/openssl"));
        assert_eq!(config.payload_mode, PayloadMode::Raw);
        assert_eq!(
            config.artifacts,
            ArtifactLocation::Directory(PathBuf::from("/tmp/artifacts"))
        );
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.strict_exit);
    }

    #[test]
    fn test_scratch_wins_over_artifact_dir() {
        let config = config_from(&[(ENV_ARTIFACT_DIR, "/tmp/artifacts"), (ENV_SCRATCH, "1")]).unwrap();
        assert_eq!(config.artifacts, ArtifactLocation::Scratch);
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let config = config_from(&[(ENV_PUBLIC_KEY, "  "), (ENV_BACKEND, "")]).unwrap();
        assert_eq!(config.public_key_path, PathBuf::from(DEFAULT_PUBLIC_KEY));
        assert_eq!(config.backend, Backend::Openssl);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            config_from(&[(ENV_BACKEND, "gpg")]),
            Err(EnvelopeError::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[(ENV_PAYLOAD_MODE, "sorted")]),
            Err(EnvelopeError::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[(ENV_STRICT_EXIT, "maybe")]),
            Err(EnvelopeError::Configuration(_))
        ));
    }
}
