// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/keys.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Loads the sender's RSA public key (PEM or DER, SPKI or PKCS#1) into the PKCS#1 DER form ring expects

use std::fs;
use std::path::Path;
use tracing::debug;
use x509_parser::der_parser::ber::BerObjectContent;
use x509_parser::der_parser::parse_der;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::FromDer;
use x509_parser::x509::SubjectPublicKeyInfo;

use crate::errors::EnvelopeError;

const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_RSASSA_PSS: &str = "1.2.840.113549.1.1.10";

/// Read a public key file and return the PKCS#1 `RSAPublicKey` DER
pub fn load_rsa_public_key(path: &Path) -> Result<Vec<u8>, EnvelopeError> {
    let bytes = fs::read(path).map_err(|e| {
        EnvelopeError::PublicKey(format!("Failed to read public key from {:?}: {}", path, e))
    })?;

    let key = rsa_public_key_der(&bytes)?;
    debug!("Loaded RSA public key {:?}: {} DER bytes", path, key.len());
    Ok(key)
}

/// Accepts `PUBLIC KEY` / `RSA PUBLIC KEY` PEM blocks or bare DER of either form.
/// Anything that does not decode to an RSA public key is a `PublicKey` error.
pub fn rsa_public_key_der(bytes: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let trimmed = skip_leading_whitespace(bytes);
    if trimmed.starts_with(b"-----BEGIN") {
        let (_, pem) = parse_x509_pem(trimmed)
            .map_err(|e| EnvelopeError::PublicKey(format!("Invalid PEM: {}", e)))?;
        return match pem.label.as_str() {
            "PUBLIC KEY" => spki_to_rsa(&pem.contents),
            "RSA PUBLIC KEY" => {
                check_rsa_public_key(&pem.contents)?;
                Ok(pem.contents)
            }
            other => Err(EnvelopeError::PublicKey(format!(
                "Unsupported PEM block '{}' (expected PUBLIC KEY or RSA PUBLIC KEY)",
                other
            ))),
        };
    }

    if trimmed.is_empty() {
        return Err(EnvelopeError::PublicKey("Public key file is empty".to_string()));
    }

    // Bare DER: SubjectPublicKeyInfo, otherwise PKCS#1 RSAPublicKey
    if SubjectPublicKeyInfo::from_der(bytes).is_ok() {
        return spki_to_rsa(bytes);
    }
    check_rsa_public_key(bytes)?;
    Ok(bytes.to_vec())
}

fn skip_leading_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn spki_to_rsa(der: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let (_, spki) = SubjectPublicKeyInfo::from_der(der)
        .map_err(|e| EnvelopeError::PublicKey(format!("Invalid SubjectPublicKeyInfo: {}", e)))?;

    let oid = spki.algorithm.algorithm.to_id_string();
    if oid != OID_RSA_ENCRYPTION && oid != OID_RSASSA_PSS {
        return Err(EnvelopeError::PublicKey(format!(
            "Public key algorithm {} is not RSA",
            oid
        )));
    }

    let key: &[u8] = &spki.subject_public_key.data;
    check_rsa_public_key(key)?;
    Ok(key.to_vec())
}

/// `RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }`, nothing trailing
fn check_rsa_public_key(der: &[u8]) -> Result<(), EnvelopeError> {
    let (rest, object) = parse_der(der)
        .map_err(|e| EnvelopeError::PublicKey(format!("Invalid RSAPublicKey DER: {}", e)))?;
    if !rest.is_empty() {
        return Err(EnvelopeError::PublicKey(format!(
            "Invalid RSAPublicKey DER: {} trailing bytes",
            rest.len()
        )));
    }

    match &object.content {
        BerObjectContent::Sequence(items)
            if items.len() == 2
                && items
                    .iter()
                    .all(|item| matches!(item.content, BerObjectContent::Integer(_))) =>
        {
            Ok(())
        }
        _ => Err(EnvelopeError::PublicKey(
            "Invalid RSAPublicKey DER: expected SEQUENCE of modulus and exponent".to_string(),
        )),
    }
}
