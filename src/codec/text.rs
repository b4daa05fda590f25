//! Text codecs over raw byte contents.
//!
//! Pure functions: no escaping, no validation of what the bytes mean.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// Lossy UTF-8 view of `bytes`.
///
/// Never fails; invalid sequences become U+FFFD replacement characters.
pub fn utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Lowercase hex, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, case-insensitively.
///
/// Fails on odd-length input or non-hex digits.
pub fn from_hex(input: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(input)?)
}

/// Standard-alphabet base64 with padding.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard-alphabet base64.
///
/// Fails on malformed input with the underlying codec's diagnostic.
pub fn from_base64(input: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(input)?)
}
