//! Dual-model byte buffer for building and parsing binary formats.
//!
//! Two buffer models share one contract (big-endian integer codec, text
//! codecs, cursor-relative reads) but differ in mutation strategy:
//!
//! - [`GrowBuf`] accumulates sequential writes with independent reader and
//!   writer cursors, growing capacity transparently.
//! - [`Bytes`] has value semantics: every structural operation returns a
//!   new instance built by copying, so transforms compose as pure
//!   functions.
//!
//! # Serializing
//!
//! ```
//! use bytebuf::{GrowBuf, ReadBytes};
//!
//! let mut buf = GrowBuf::new();
//! buf.write_int(7i16).write_bytes(b"payload");
//! assert_eq!(buf.len(), 9);
//! assert_eq!(buf.read_int::<i16>().unwrap(), 7);
//! assert_eq!(buf.remaining().unwrap(), b"payload");
//! ```
//!
//! # Value pipelines
//!
//! ```
//! use bytebuf::Bytes;
//!
//! let framed = Bytes::from_utf8("body")
//!     .prepend_int(4i16)
//!     .append(Bytes::from_hex("0d0a").unwrap());
//! assert_eq!(framed.to_hex(), "0004626f64790d0a");
//! ```

#![warn(missing_docs)]

pub mod codec;

mod bytes;
mod error;
mod grow;

pub use bytes::Bytes;
pub use codec::{Int, RawBytes, ReadBytes};
pub use error::{BufError, Result};
pub use grow::GrowBuf;

// Arbitrary-precision integers used by the bigint read/write family.
pub use num_bigint::{BigInt, BigUint};

#[cfg(test)]
mod tests;
