//! Value-semantics byte buffer: structural operations return new instances.

use core::fmt;
use std::io::{self, Write};

use num_bigint::BigInt;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::codec::{self, Int, RawBytes, ReadBytes};
use crate::error::{BufError, Result};

/// Fixed-size byte buffer with value semantics.
///
/// Every structural operation ([`append`](Bytes::append),
/// [`prepend`](Bytes::prepend), [`slice`](Bytes::slice),
/// [`fill`](Bytes::fill)) copies into a new instance; the original is
/// never observed to change. The two documented exceptions are
/// [`set_bytes`](Bytes::set_bytes) and [`clear`](Bytes::clear), which
/// mutate in place to support buffer reuse without reallocation.
///
/// Reads share the cursor convention of [`GrowBuf`](crate::GrowBuf):
/// reading at the reader cursor advances it, reading at an explicit
/// index does not.
///
/// # Example
///
/// ```
/// use bytebuf::Bytes;
///
/// let ab = Bytes::from_utf8("AB");
/// let abcd = ab.append(Bytes::from_utf8("CD"));
/// assert_eq!(abcd.to_utf8(), "ABCD");
/// assert_eq!(ab.to_utf8(), "AB"); // original untouched
/// ```
#[derive(Clone)]
pub struct Bytes {
    storage: Box<[u8]>,
    reader: usize,
}

impl Bytes {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Buffer of `len` zero bytes.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![0; len])
    }

    /// Buffer holding a copy of `bytes`.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Buffer holding the UTF-8 bytes of `text`.
    #[must_use]
    pub fn from_utf8(text: &str) -> Self {
        Self::from_slice(text.as_bytes())
    }

    /// Decode a hex string into a buffer.
    pub fn from_hex(input: &str) -> Result<Self> {
        Ok(Self::from_vec(codec::from_hex(input)?))
    }

    /// Decode a base64 string into a buffer.
    pub fn from_base64(input: &str) -> Result<Self> {
        Ok(Self::from_vec(codec::from_base64(input)?))
    }

    /// Buffer holding `len` bytes from the OS cryptographically secure
    /// random source.
    #[must_use]
    pub fn random(len: usize) -> Self {
        let mut bytes = vec![0; len];
        OsRng.fill_bytes(&mut bytes);
        Self::from_vec(bytes)
    }

    /// Absent input becomes an empty buffer instead of failing.
    #[must_use]
    pub fn from_opt<T: Into<Bytes>>(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_default()
    }

    /// Concatenate `parts` into a single buffer.
    pub fn concat<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut out = Vec::new();
        for part in parts {
            out.extend_from_slice(part.as_ref());
        }
        Self::from_vec(out)
    }

    fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            storage: bytes.into_boxed_slice(),
            reader: 0,
        }
    }

    /// New buffer with `tail` appended after this buffer's contents.
    #[must_use]
    pub fn append(&self, tail: impl AsRef<[u8]>) -> Bytes {
        let tail = tail.as_ref();
        let mut out = Vec::with_capacity(self.storage.len() + tail.len());
        out.extend_from_slice(&self.storage);
        out.extend_from_slice(tail);
        Self::from_vec(out)
    }

    /// [`append`](Bytes::append) with an absent tail degrading to
    /// [`copy`](Bytes::copy) rather than failing.
    #[must_use]
    pub fn append_opt(&self, tail: Option<impl AsRef<[u8]>>) -> Bytes {
        match tail {
            Some(tail) => self.append(tail),
            None => self.copy(),
        }
    }

    /// New buffer with `head` placed before this buffer's contents.
    #[must_use]
    pub fn prepend(&self, head: impl AsRef<[u8]>) -> Bytes {
        let head = head.as_ref();
        let mut out = Vec::with_capacity(head.len() + self.storage.len());
        out.extend_from_slice(head);
        out.extend_from_slice(&self.storage);
        Self::from_vec(out)
    }

    /// [`prepend`](Bytes::prepend) with an absent head degrading to
    /// [`copy`](Bytes::copy).
    #[must_use]
    pub fn prepend_opt(&self, head: Option<impl AsRef<[u8]>>) -> Bytes {
        match head {
            Some(head) => self.prepend(head),
            None => self.copy(),
        }
    }

    /// Append the big-endian encoding of `value`.
    #[must_use]
    pub fn append_int<T: Int>(&self, value: T) -> Bytes {
        let mut out = Vec::with_capacity(T::ENCODED.unwrap_or(9));
        value.encode_be(&mut out);
        self.append(out)
    }

    /// Prepend the big-endian encoding of `value`.
    #[must_use]
    pub fn prepend_int<T: Int>(&self, value: T) -> Bytes {
        let mut out = Vec::with_capacity(T::ENCODED.unwrap_or(9));
        value.encode_be(&mut out);
        self.prepend(out)
    }

    /// Append the minimal two's-complement big-endian encoding of `value`.
    #[must_use]
    pub fn append_bigint(&self, value: &BigInt) -> Bytes {
        self.append(value.to_signed_bytes_be())
    }

    /// Copy of `[start, end)`, with Python-style negative indices
    /// resolved against the buffer size (`-1` is the last byte).
    ///
    /// Fails with [`BufError::OutOfRange`] when a resolved index is still
    /// negative, `start > end`, or `end` exceeds the size.
    pub fn slice(&self, start: isize, end: isize) -> Result<Bytes> {
        let size = self.storage.len();
        let resolve = |index: isize| {
            if index >= 0 {
                index
            } else {
                index + size as isize
            }
        };

        let (start, end) = (resolve(start), resolve(end));
        if start < 0 || end < 0 || start > end || end as usize > size {
            return Err(BufError::OutOfRange {
                start,
                end,
                available: size,
            });
        }

        Ok(Self::from_slice(&self.storage[start as usize..end as usize]))
    }

    /// First `end` bytes: `slice(0, end)`.
    pub fn cut(&self, end: isize) -> Result<Bytes> {
        self.slice(0, end)
    }

    /// Everything from `start` to the end.
    pub fn slice_from(&self, start: isize) -> Result<Bytes> {
        self.slice(start, self.storage.len() as isize)
    }

    /// Sparse fill over the whole buffer: see
    /// [`fill_up_to`](Bytes::fill_up_to).
    #[must_use]
    pub fn fill(&self, value: u8) -> Bytes {
        self.fill_up_to(value, self.storage.len())
    }

    /// New buffer where every zero byte at an index below `len` becomes
    /// `value`.
    ///
    /// Non-zero bytes and indices at or beyond `len` are preserved. This
    /// is a zero-only fill for padding workflows, not a full overwrite.
    #[must_use]
    pub fn fill_up_to(&self, value: u8, len: usize) -> Bytes {
        let mut out = self.storage.to_vec();
        for byte in out.iter_mut().take(len) {
            if *byte == 0 {
                *byte = value;
            }
        }
        Self::from_vec(out)
    }

    /// Byte at `index`, or `None` past the end. Never fails.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<u8> {
        self.storage.get(index).copied()
    }

    /// First index holding `value`.
    #[must_use]
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.storage.iter().position(|&byte| byte == value)
    }

    /// Validate the size inline, passing the buffer through on success.
    ///
    /// ```
    /// use bytebuf::Bytes;
    ///
    /// let key = Bytes::from_hex("deadbeef").unwrap().assert_size(4).unwrap();
    /// assert!(key.assert_size(32).is_err());
    /// ```
    pub fn assert_size(self, expected: usize) -> Result<Self> {
        let actual = self.storage.len();
        if actual != expected {
            return Err(BufError::SizeMismatch { expected, actual });
        }
        Ok(self)
    }

    /// Deep duplicate with a reset reader cursor.
    ///
    /// `Clone` preserves the cursor; `copy` is the fresh-cursor duplicate.
    #[must_use]
    pub fn copy(&self) -> Bytes {
        Self::from_slice(&self.storage)
    }

    /// Replace the storage wholesale and reset the reader cursor.
    ///
    /// In-place mutation, one of the two documented exceptions to the
    /// copy-producing convention: the instance identity is preserved.
    pub fn set_bytes(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.storage = bytes.as_ref().to_vec().into_boxed_slice();
        self.reader = 0;
        self
    }

    /// Zero the storage in place and reset the reader cursor.
    ///
    /// The second in-place mutation, supporting reuse without
    /// reallocation.
    pub fn clear(&mut self) -> &mut Self {
        self.storage.fill(0);
        self.reader = 0;
        self
    }

    /// Read `len` bytes at the reader cursor into a new buffer.
    pub fn read_buffer(&mut self, len: usize) -> Result<Bytes> {
        Ok(Self::from_vec(self.read_bytes(len)?))
    }

    /// Read `len` bytes starting at `index` into a new buffer.
    pub fn read_buffer_at(&mut self, index: usize, len: usize) -> Result<Bytes> {
        Ok(Self::from_vec(self.read_bytes_at(index, len)?))
    }

    /// Buffer size, fixed at construction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Fresh copy of the contents; the backing storage is never aliased.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.storage.to_vec()
    }

    /// Lossy UTF-8 view of the contents.
    #[must_use]
    pub fn to_utf8(&self) -> String {
        codec::utf8(&self.storage)
    }

    /// Lowercase hex of the contents.
    #[must_use]
    pub fn to_hex(&self) -> String {
        codec::to_hex(&self.storage)
    }

    /// Standard base64 of the contents.
    #[must_use]
    pub fn to_base64(&self) -> String {
        codec::to_base64(&self.storage)
    }

    /// Stream the contents into `sink`.
    pub fn to_writer<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.storage)
    }

    /// Relaxed comparison against any raw byte sequence or buffer-like.
    pub fn content_eq(&self, other: impl AsRef<[u8]>) -> bool {
        *self.storage == *other.as_ref()
    }
}

impl RawBytes for Bytes {
    fn raw(&self) -> &[u8] {
        &self.storage
    }

    fn read_limit(&self) -> usize {
        self.storage.len()
    }

    fn reader(&self) -> usize {
        self.reader
    }

    fn set_reader(&mut self, index: usize) {
        self.reader = index;
    }
}

impl Default for Bytes {
    fn default() -> Self {
        Self::new()
    }
}

// Cursor position is bookkeeping, not value.
impl PartialEq for Bytes {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl Eq for Bytes {}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bytes")
            .field("content", &self.to_hex())
            .field("reader", &self.reader)
            .finish()
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.storage
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<&str> for Bytes {
    fn from(text: &str) -> Self {
        Self::from_utf8(text)
    }
}
