//! Log byte decoding
//!
//! Vina logs are normally UTF-8, but logs produced on older pipelines
//! occasionally arrive in single-byte legacy encodings. Decoding attempts
//! strict UTF-8 first and falls back to a Latin-1-style byte mapping.

use crate::app::models::ParseError;

/// Decode raw log bytes into normalized text
///
/// Strict UTF-8 is tried first; on failure each byte is widened to the
/// Unicode code point of the same value, which accepts any byte sequence.
/// The [`ParseError::Decode`] outcome is therefore unreachable in practice
/// but remains part of the contract. Line endings are normalized
/// (`\r\n` → `\n`) so downstream offset arithmetic is platform-independent.
pub fn decode(bytes: &[u8]) -> Result<String, ParseError> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => decode_latin1(bytes),
    };

    Ok(normalize_line_endings(&text))
}

/// Widen each byte to the Unicode code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Replace CRLF pairs with bare LF
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
