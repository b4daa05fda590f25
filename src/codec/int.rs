//! Width-parameterized big-endian integer codec.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{BufError, Result};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can pass through a buffer.
///
/// One implementation per width and signedness replaces a method per
/// combination: buffers expose a single `write_int`/`read_int` pair
/// parameterized over this trait.
///
/// Writes widen unsigned values to the next signed width before encoding
/// (`u8` and `u16` as a 4-byte `i32`, `u32` as an 8-byte `i64`, `u64` as a
/// minimal two's-complement big integer). Reads always consume the natural
/// width and, for unsigned types, reinterpret the signed bit pattern.
///
/// # Example
///
/// ```
/// use bytebuf::Int;
///
/// let mut out = Vec::new();
/// 258i32.encode_be(&mut out);
/// assert_eq!(out, [0, 0, 1, 2]);
/// assert_eq!(i32::decode_be(&out).unwrap(), 258);
/// ```
pub trait Int: sealed::Sealed + Copy + Sized {
    /// Bytes produced by [`encode_be`](Int::encode_be), when fixed.
    ///
    /// `None` for `u64`, whose encoding is the minimal two's-complement
    /// form and varies between 1 and 9 bytes.
    const ENCODED: Option<usize>;

    /// Bytes consumed by [`decode_be`](Int::decode_be).
    const DECODED: usize;

    /// Type name used in overflow diagnostics.
    const NAME: &'static str;

    /// Append the big-endian encoding of `self` to `out`.
    fn encode_be(self, out: &mut Vec<u8>);

    /// Decode from [`Self::DECODED`] big-endian two's-complement bytes.
    ///
    /// Fails with [`BufError::IntOverflow`] when the encoded value does
    /// not fit the target type exactly; it is never truncated.
    fn decode_be(raw: &[u8]) -> Result<Self>;
}

macro_rules! impl_signed {
    ($($ty:ty => $to:ident),+ $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Int for $ty {
            const ENCODED: Option<usize> = Some(size_of::<$ty>());
            const DECODED: usize = size_of::<$ty>();
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn encode_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            fn decode_be(raw: &[u8]) -> Result<Self> {
                let value = BigInt::from_signed_bytes_be(raw);
                match value.$to() {
                    Some(v) => Ok(v),
                    None => Err(BufError::IntOverflow {
                        width: Self::NAME,
                        value,
                    }),
                }
            }
        }
    )+};
}

impl_signed!(i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64);

// Unsigned writes go out widened to the next signed width that holds the
// full value range; reads take the natural width and reinterpret the
// signed bit pattern (so `[0xFF, 0xFF]` decodes to 65535 as u16).
macro_rules! impl_unsigned {
    ($($ty:ty => ($signed:ty, $wide:ty)),+ $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Int for $ty {
            const ENCODED: Option<usize> = Some(size_of::<$wide>());
            const DECODED: usize = size_of::<$ty>();
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn encode_be(self, out: &mut Vec<u8>) {
                <$wide as Int>::encode_be(self as $wide, out);
            }

            #[inline]
            fn decode_be(raw: &[u8]) -> Result<Self> {
                <$signed>::decode_be(raw).map(|v| v as $ty)
            }
        }
    )+};
}

impl_unsigned!(u8 => (i8, i32), u16 => (i16, i32), u32 => (i32, i64));

impl sealed::Sealed for u64 {}

impl Int for u64 {
    const ENCODED: Option<usize> = None;
    const DECODED: usize = 8;
    const NAME: &'static str = "u64";

    fn encode_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&BigInt::from(self).to_signed_bytes_be());
    }

    #[inline]
    fn decode_be(raw: &[u8]) -> Result<Self> {
        i64::decode_be(raw).map(|v| v as u64)
    }
}
