// Path and File Name : /home/ransomeye/rebuild/core/envelope_verify/src/canonical.rs
// Author: nXxBku0CKFAJCBN3X1g3bQk7OxYQylg8CMw1iGsq7gU
// Details of functionality of this file: Canonical JSON rendering of the signed payload, byte-compatible with the reference signer's serializer

use std::io::{self, Write};
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::errors::EnvelopeError;

/// serde_json formatter reproducing the signer's default JSON output:
/// `", "` / `": "` separators, document key order (via `preserve_order`),
/// ASCII-only strings and the signer's number rendering.
///
/// Numbers arrive as their source tokens (`arbitrary_precision`), so integers
/// of any size survive untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignerJsonFormatter;

impl Formatter for SignerJsonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // Control characters below 0x20, quote and backslash reach write_char_escape
    // and keep serde_json's escapes, which already match.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if is_integer_token(value) {
            if value == "-0" {
                return writer.write_all(b"0");
            }
            return writer.write_all(value.as_bytes());
        }

        let parsed: f64 = value
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writer.write_all(render_float(parsed).as_bytes())
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(render_float(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(render_float(f64::from(value)).as_bytes())
    }
}

/// Render a value to the canonical byte form the signature covers
pub fn canonical_json<T>(value: &T) -> Result<Vec<u8>, EnvelopeError>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SignerJsonFormatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| EnvelopeError::PayloadSerialization(e.to_string()))?;
    Ok(buffer)
}

fn is_integer_token(token: &str) -> bool {
    !token.contains(['.', 'e', 'E'])
}

/// Shortest round-trip rendering: positional for decimal exponents in -4..16
/// (always with a fractional part), scientific with a signed two-digit
/// exponent otherwise.
pub(crate) fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.5e-5" or "0e0"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return scientific,
    };
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa
        .trim_start_matches('-')
        .chars()
        .filter(|c| *c != '.')
        .collect();
    let sign = if negative { "-" } else { "" };

    if (-4..16).contains(&exponent) {
        let (integral, fractional) = if exponent >= 0 {
            let integral_len = exponent as usize + 1;
            if digits.len() <= integral_len {
                let padding = "0".repeat(integral_len - digits.len());
                (format!("{}{}", digits, padding), "0".to_string())
            } else {
                (
                    digits[..integral_len].to_string(),
                    digits[integral_len..].to_string(),
                )
            }
        } else {
            let leading_zeros = "0".repeat((-exponent - 1) as usize);
            ("0".to_string(), format!("{}{}", leading_zeros, digits))
        };
        format!("{}{}.{}", sign, integral, fractional)
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}{}e{}{:02}",
            sign,
            mantissa,
            exponent_sign,
            exponent.unsigned_abs()
        )
    }
}
