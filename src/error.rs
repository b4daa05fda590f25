//! Error types for buffer and codec operations.

use core::fmt;

use num_bigint::BigInt;

/// Error produced by buffer reads, slices, validation, and text decoding.
///
/// Every failure is final at the point it occurs; there is no internal
/// retry and nothing is logged. Callers match on the variant at their
/// own boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BufError {
    /// Read or slice request falls outside the buffer bounds.
    ///
    /// `start` may be negative when a Python-style negative index still
    /// resolves below zero.
    OutOfRange {
        /// Resolved start of the offending access.
        start: isize,
        /// Exclusive end of the offending access.
        end: isize,
        /// Readable bytes at the time of the access.
        available: usize,
    },

    /// Decoded integer exceeds the representable range of the requested
    /// width. The value is never truncated or wrapped.
    IntOverflow {
        /// Name of the requested integer type.
        width: &'static str,
        /// The decoded value that did not fit.
        value: BigInt,
    },

    /// Buffer size did not match the asserted size.
    SizeMismatch {
        /// Size the caller asserted.
        expected: usize,
        /// Actual buffer size.
        actual: usize,
    },

    /// Hex decode of invalid text.
    Hex(hex::FromHexError),

    /// Base64 decode of invalid text.
    Base64(base64::DecodeError),
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                start,
                end,
                available,
            } => {
                write!(
                    f,
                    "access out of range: {start}..{end} on {available} readable bytes"
                )
            }
            Self::IntOverflow { width, value } => {
                write!(f, "value {value} does not fit in {width}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} bytes, got {actual}")
            }
            Self::Hex(err) => write!(f, "invalid hex: {err}"),
            Self::Base64(err) => write!(f, "invalid base64: {err}"),
        }
    }
}

impl std::error::Error for BufError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex(err) => Some(err),
            Self::Base64(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for BufError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err)
    }
}

impl From<base64::DecodeError> for BufError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err)
    }
}

/// Result type for buffer operations.
pub type Result<T> = core::result::Result<T, BufError>;
