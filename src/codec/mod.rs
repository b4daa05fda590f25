//! Shared codec layer.
//!
//! Both buffer models expose the same low-level capability ([`RawBytes`]);
//! the whole cursor-aware read family ([`ReadBytes`]) and the integer and
//! text codecs are written once against it.

mod int;
mod text;

pub use int::Int;
pub use text::{from_base64, from_hex, to_base64, to_hex, utf8};

use num_bigint::{BigInt, BigUint};

use crate::error::{BufError, Result};

/// Low-level byte access implemented by each buffer model.
///
/// `read_limit` bounds every read: the writer cursor for
/// [`GrowBuf`](crate::GrowBuf), the fixed size for [`Bytes`](crate::Bytes).
pub trait RawBytes {
    /// The full backing storage.
    fn raw(&self) -> &[u8];

    /// Exclusive upper bound for reads.
    fn read_limit(&self) -> usize;

    /// Current reader cursor.
    fn reader(&self) -> usize;

    /// Move the reader cursor.
    fn set_reader(&mut self, index: usize);
}

/// Cursor-aware read family, shared by both buffer models.
///
/// Reading at the current reader cursor advances it; reading at an
/// explicit index leaves the cursor untouched. No read ever returns a
/// partial result: exceeding the read limit is an error.
///
/// # Example
///
/// ```
/// use bytebuf::{GrowBuf, ReadBytes};
///
/// let mut buf = GrowBuf::from_slice(&[0xFF, 0xFF, 0x01]);
/// assert_eq!(buf.read_int::<i16>().unwrap(), -1); // cursor advances
/// assert_eq!(buf.read_int_at::<u16>(0).unwrap(), 65535); // cursor stays
/// assert_eq!(buf.readable_bytes(), 1);
/// ```
pub trait ReadBytes: RawBytes {
    /// Read `len` bytes at the reader cursor, advancing it.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.read_bytes_at(self.reader(), len)
    }

    /// Read `len` bytes starting at `index` into a fresh copy.
    ///
    /// Advances the reader cursor only when `index` is the cursor itself.
    fn read_bytes_at(&mut self, index: usize, len: usize) -> Result<Vec<u8>> {
        let limit = self.read_limit();
        let end = match index.checked_add(len) {
            Some(end) if end <= limit => end,
            _ => {
                return Err(BufError::OutOfRange {
                    start: index as isize,
                    end: index.saturating_add(len) as isize,
                    available: limit,
                });
            }
        };

        let out = self.raw()[index..end].to_vec();
        if index == self.reader() {
            self.set_reader(end);
        }
        Ok(out)
    }

    /// Decode an integer at the reader cursor, advancing it.
    fn read_int<T: Int>(&mut self) -> Result<T> {
        self.read_int_at(self.reader())
    }

    /// Decode an integer from [`Int::DECODED`] bytes starting at `index`.
    fn read_int_at<T: Int>(&mut self, index: usize) -> Result<T> {
        let raw = self.read_bytes_at(index, T::DECODED)?;
        T::decode_be(&raw)
    }

    /// Interpret `len` bytes at the reader cursor as a signed
    /// two's-complement big integer, advancing the cursor.
    fn read_bigint(&mut self, len: usize) -> Result<BigInt> {
        self.read_bigint_at(self.reader(), len)
    }

    /// Interpret `len` bytes starting at `index` as a signed
    /// two's-complement big integer.
    fn read_bigint_at(&mut self, index: usize, len: usize) -> Result<BigInt> {
        let raw = self.read_bytes_at(index, len)?;
        Ok(BigInt::from_signed_bytes_be(&raw))
    }

    /// Interpret `len` bytes at the reader cursor as a non-negative big
    /// integer (plain big-endian magnitude), advancing the cursor.
    fn read_bigint_unsigned(&mut self, len: usize) -> Result<BigUint> {
        self.read_bigint_unsigned_at(self.reader(), len)
    }

    /// Non-negative reinterpretation of `len` bytes starting at `index`.
    fn read_bigint_unsigned_at(&mut self, index: usize, len: usize) -> Result<BigUint> {
        let raw = self.read_bytes_at(index, len)?;
        Ok(BigUint::from_bytes_be(&raw))
    }

    /// Bytes left between the reader cursor and the read limit.
    fn readable_bytes(&self) -> usize {
        self.read_limit().saturating_sub(self.reader())
    }

    /// True if at least one byte is readable.
    fn is_readable(&self) -> bool {
        self.readable_bytes() > 0
    }

    /// Read everything from the reader cursor to the read limit,
    /// advancing the cursor to the limit.
    fn remaining(&mut self) -> Result<Vec<u8>> {
        let len = self.readable_bytes();
        self.read_bytes(len)
    }
}

impl<B: RawBytes> ReadBytes for B {}
