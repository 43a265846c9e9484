// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/config.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Verifier configuration - defaults overlaid by ENVELOPE_* environment variables (CLI flags overlay in main)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use clap::ValueEnum;
use serde::Serialize;

use crate::errors::EnvelopeError;

pub const DEFAULT_PUBLIC_KEY: &str = "sender_public_key.pem";
pub const DEFAULT_OPENSSL_BIN: &str = "openssl";
pub const DATA_ARTIFACT_NAME: &str = "data.txt";
pub const SIGNATURE_ARTIFACT_NAME: &str = "sig1.sig";

pub const ENV_PUBLIC_KEY: &str = "ENVELOPE_PUBLIC_KEY";
pub const ENV_BACKEND: &str = "ENVELOPE_VERIFY_BACKEND";
pub const ENV_OPENSSL_BIN: &str = "ENVELOPE_OPENSSL_BIN";
pub const ENV_PAYLOAD_MODE: &str = "ENVELOPE_PAYLOAD_MODE";
pub const ENV_ARTIFACT_DIR: &str = "ENVELOPE_ARTIFACT_DIR";
pub const ENV_SCRATCH: &str = "ENVELOPE_SCRATCH";
pub const ENV_OUTPUT_FORMAT: &str = "ENVELOPE_OUTPUT_FORMAT";
pub const ENV_STRICT_EXIT: &str = "ENVELOPE_STRICT_EXIT";

/// Which implementation performs the cryptographic check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// External `openssl dgst` process
    Openssl,
    /// In-process verification with ring
    #[value(alias = "ring")]
    Native,
}

/// Which bytes of the `data` field are checked against the signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PayloadMode {
    /// Re-serialized with the reference signer's JSON rules
    Canonical,
    /// Verbatim source text of the `data` value
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable verdict
    Text,
    /// Structured report
    Json,
}

/// Where `data.txt` and `sig1.sig` are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLocation {
    /// Current working directory (reference layout)
    WorkingDir,
    /// Caller-supplied directory
    Directory(PathBuf),
    /// Private temporary directory, removed after the run
    Scratch,
}

impl FromStr for Backend {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openssl" => Ok(Backend::Openssl),
            "native" | "ring" => Ok(Backend::Native),
            other => Err(EnvelopeError::Configuration(format!(
                "Unknown verifier backend '{}' (expected openssl or native)",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Openssl => write!(f, "openssl"),
            Backend::Native => write!(f, "native"),
        }
    }
}

impl FromStr for PayloadMode {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(PayloadMode::Canonical),
            "raw" => Ok(PayloadMode::Raw),
            other => Err(EnvelopeError::Configuration(format!(
                "Unknown payload mode '{}' (expected canonical or raw)",
                other
            ))),
        }
    }
}

impl fmt::Display for PayloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadMode::Canonical => write!(f, "canonical"),
            PayloadMode::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(EnvelopeError::Configuration(format!(
                "Unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    pub public_key_path: PathBuf,
    pub backend: Backend,
    pub openssl_program: PathBuf,
    pub payload_mode: PayloadMode,
    pub artifacts: ArtifactLocation,
    pub output_format: OutputFormat,
    pub strict_exit: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            public_key_path: PathBuf::from(DEFAULT_PUBLIC_KEY),
            backend: Backend::Openssl,
            openssl_program: PathBuf::from(DEFAULT_OPENSSL_BIN),
            payload_mode: PayloadMode::Canonical,
            artifacts: ArtifactLocation::WorkingDir,
            output_format: OutputFormat::Text,
            strict_exit: false,
        }
    }
}

impl VerifierConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, EnvelopeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup; unset keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvelopeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(ENV_PUBLIC_KEY)) {
            config.public_key_path = PathBuf::from(path);
        }
        if let Some(backend) = non_empty(lookup(ENV_BACKEND)) {
            config.backend = backend.parse()?;
        }
        if let Some(program) = non_empty(lookup(ENV_OPENSSL_BIN)) {
            config.openssl_program = PathBuf::from(program);
        }
        if let Some(mode) = non_empty(lookup(ENV_PAYLOAD_MODE)) {
            config.payload_mode = mode.parse()?;
        }
        if let Some(dir) = non_empty(lookup(ENV_ARTIFACT_DIR)) {
            config.artifacts = ArtifactLocation::Directory(PathBuf::from(dir));
        }
        if env_flag(ENV_SCRATCH, lookup(ENV_SCRATCH))? {
            config.artifacts = ArtifactLocation::Scratch;
        }
        if let Some(format) = non_empty(lookup(ENV_OUTPUT_FORMAT)) {
            config.output_format = format.parse()?;
        }
        config.strict_exit = env_flag(ENV_STRICT_EXIT, lookup(ENV_STRICT_EXIT))?;

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn env_flag(key: &str, value: Option<String>) -> Result<bool, EnvelopeError> {
    match non_empty(value) {
        None => Ok(false),
        Some(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(EnvelopeError::Configuration(format!(
                "Invalid {}='{}' (expected 1/0 or true/false)",
                key, v
            ))),
        },
    }
}
