// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/main.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: verify_envelope CLI - verifies a JSON signed envelope and reports the verdict

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};

use envelope_verify::{
    ArtifactLocation, Backend, EnvelopeError, EnvelopeVerifier, OutputFormat, PayloadMode,
    VerifierConfig,
};

/// Exit status when --strict is set and the signature does not verify
const EXIT_UNVERIFIED: i32 = 2;
/// Exit status for malformed input and other fatal errors
const EXIT_FATAL: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "verify_envelope")]
#[command(version)]
#[command(about = "Verify a detached RSA-PSS/SHA-256 signature bundled with a JSON payload")]
struct Cli {
    /// Path to the envelope file ({"data": ..., "signature": "<hex>"})
    envelope: PathBuf,

    /// Public key of the sender (PEM or DER)
    #[arg(long)]
    public_key: Option<PathBuf>,

    /// Verification backend
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// openssl program to run for the openssl backend
    #[arg(long)]
    openssl: Option<PathBuf>,

    /// Bytes to verify: canonical re-serialization or raw envelope text
    #[arg(long, value_enum)]
    payload_mode: Option<PayloadMode>,

    /// Directory for data.txt and sig1.sig
    #[arg(long, conflicts_with = "scratch")]
    out_dir: Option<PathBuf>,

    /// Write artifacts to a temporary directory removed after the run
    #[arg(long)]
    scratch: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with status 2 when the signature does not verify
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<VerifierConfig, EnvelopeError> {
        let mut config = VerifierConfig::from_env()?;

        if let Some(path) = &self.public_key {
            config.public_key_path = path.clone();
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(program) = &self.openssl {
            config.openssl_program = program.clone();
        }
        if let Some(mode) = self.payload_mode {
            config.payload_mode = mode;
        }
        if let Some(dir) = &self.out_dir {
            config.artifacts = ArtifactLocation::Directory(dir.clone());
        }
        if self.scratch {
            config.artifacts = ArtifactLocation::Scratch;
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if self.strict {
            config.strict_exit = true;
        }

        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    };
    let output_format = config.output_format;
    let strict_exit = config.strict_exit;

    let verifier = EnvelopeVerifier::new(config);
    let report = match verifier.verify_file(&cli.envelope) {
        Ok(report) => report,
        Err(e) => {
            error!("Envelope verification aborted: {}", e);
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    };

    match report.render(output_format) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    }

    if strict_exit && !report.verified {
        process::exit(EXIT_UNVERIFIED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_envelope_path() {
        assert!(Cli::try_parse_from(["verify_envelope"]).is_err());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "verify_envelope",
            "envelope.json",
            "--public-key",
            "keys/pub.pem",
            "--backend",
            "native",
            "--payload-mode",
            "raw",
            "--format",
            "json",
            "--strict",
            "--scratch",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.public_key_path, PathBuf::from("keys/pub.pem"));
        assert_eq!(config.backend, Backend::Native);
        assert_eq!(config.payload_mode, PayloadMode::Raw);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.artifacts, ArtifactLocation::Scratch);
        assert!(config.strict_exit);
    }

    #[test]
    fn cli_rejects_out_dir_with_scratch() {
        let parsed = Cli::try_parse_from([
            "verify_envelope",
            "envelope.json",
            "--out-dir",
            "out",
            "--scratch",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cli_rejects_unknown_values() {
        let err = Cli::try_parse_from(["verify_envelope", "envelope.json", "--backend", "gpg"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        assert!(Cli::try_parse_from(["verify_envelope", "envelope.json", "--payload-mode", "sorted"]).is_err());
        assert!(Cli::try_parse_from(["verify_envelope", "envelope.json", "--format", "yaml"]).is_err());
    }

    #[test]
    fn cli_accepts_ring_alias() {
        let cli = Cli::try_parse_from(["verify_envelope", "envelope.json", "--backend", "ring"]).unwrap();
        assert_eq!(cli.backend, Some(Backend::Native));
    }
}
