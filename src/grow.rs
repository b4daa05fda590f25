//! Growable buffer with independent reader and writer cursors.

use core::fmt;
use std::io::{self, Write};

use num_bigint::BigInt;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::bytes::Bytes;
use crate::codec::{self, Int, RawBytes, ReadBytes};
use crate::error::Result;

/// Reserve granted on every growth step.
pub(crate) const DEFAULT_EXPAND: usize = 32;
/// Headroom multiplier applied on top of the expand size.
pub(crate) const EXPAND_MULTIPLIER: usize = 4;

/// Growable byte buffer with separate reader and writer cursors.
///
/// Built for accumulating output while optionally re-reading what was
/// written. Capacity grows transparently when a write overflows and never
/// shrinks, not even on [`clear`](GrowBuf::clear). The logical content is
/// `storage[0..writer]`; reads are bounds-checked against the writer
/// cursor, so unwritten capacity is never observable.
///
/// Cursor convention (shared with [`Bytes`]): operations at the current
/// cursor advance it, operations at an explicit index do not.
///
/// # Example
///
/// ```
/// use bytebuf::{GrowBuf, ReadBytes};
///
/// let mut buf = GrowBuf::allocate(4);
/// buf.write_int(258i32);
/// assert_eq!(buf.readable_bytes(), 4);
/// assert_eq!(buf.read_int::<i32>().unwrap(), 258);
/// ```
#[derive(Clone)]
pub struct GrowBuf {
    // Length of the vec is the capacity; the tail past `writer` stays
    // zero-filled.
    storage: Vec<u8>,
    reader: usize,
    writer: usize,
}

impl GrowBuf {
    /// Buffer with the default initial capacity (128 bytes), cursors at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::allocate(DEFAULT_EXPAND * EXPAND_MULTIPLIER)
    }

    /// Buffer with capacity `len`, both cursors at 0.
    #[must_use]
    pub fn allocate(len: usize) -> Self {
        Self {
            storage: vec![0; len],
            reader: 0,
            writer: 0,
        }
    }

    /// Buffer with zero capacity: nothing readable, nothing writable
    /// until the first growing write.
    #[must_use]
    pub fn empty() -> Self {
        Self::allocate(0)
    }

    /// Buffer holding `len` zero bytes as written content.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![0; len])
    }

    /// Buffer holding a copy of `bytes`, writer cursor at the end.
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
    pub fn from_opt<T: Into<GrowBuf>>(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_else(Self::empty)
    }

    fn from_vec(storage: Vec<u8>) -> Self {
        let writer = storage.len();
        Self {
            storage,
            reader: 0,
            writer,
        }
    }

    /// Write `bytes` at the writer cursor, advancing it.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_bytes_at(self.writer, bytes)
    }

    /// Write `bytes` starting at `index`, growing capacity as needed.
    ///
    /// The writer cursor advances only when `index` is the cursor itself;
    /// explicit-offset writes leave it untouched.
    pub fn write_bytes_at(&mut self, index: usize, bytes: &[u8]) -> &mut Self {
        self.reserve(index, bytes.len());
        self.storage[index..index + bytes.len()].copy_from_slice(bytes);
        if index == self.writer {
            self.writer += bytes.len();
        }
        self
    }

    // Amortized growth: whenever a write reaches the current capacity,
    // reserve max(len, DEFAULT_EXPAND) plus DEFAULT_EXPAND * EXPAND_MULTIPLIER
    // extra, copying the old contents over.
    fn reserve(&mut self, index: usize, len: usize) {
        let capacity = self.storage.len();
        if index + len < capacity {
            return;
        }
        let extra = len.max(DEFAULT_EXPAND) + DEFAULT_EXPAND * EXPAND_MULTIPLIER;
        let grown = (capacity + extra).max(index + len);
        self.storage.resize(grown, 0);
    }

    /// Encode `value` big-endian at the writer cursor, advancing it.
    pub fn write_int<T: Int>(&mut self, value: T) -> &mut Self {
        self.write_int_at(self.writer, value)
    }

    /// Encode `value` big-endian starting at `index`.
    pub fn write_int_at<T: Int>(&mut self, index: usize, value: T) -> &mut Self {
        let mut out = Vec::with_capacity(T::ENCODED.unwrap_or(9));
        value.encode_be(&mut out);
        self.write_bytes_at(index, &out)
    }

    /// Write the minimal two's-complement big-endian encoding of `value`
    /// at the writer cursor.
    ///
    /// The length is implicit in the encoding, never padded; callers
    /// needing a fixed width must pad separately.
    pub fn write_bigint(&mut self, value: &BigInt) -> &mut Self {
        self.write_bigint_at(self.writer, value)
    }

    /// Write the minimal two's-complement encoding of `value` at `index`.
    pub fn write_bigint_at(&mut self, index: usize, value: &BigInt) -> &mut Self {
        self.write_bytes_at(index, &value.to_signed_bytes_be())
    }

    /// Read `len` bytes at the reader cursor into a new buffer.
    pub fn read_buffer(&mut self, len: usize) -> Result<GrowBuf> {
        Ok(Self::from_vec(self.read_bytes(len)?))
    }

    /// Read `len` bytes starting at `index` into a new buffer.
    pub fn read_buffer_at(&mut self, index: usize, len: usize) -> Result<GrowBuf> {
        Ok(Self::from_vec(self.read_bytes_at(index, len)?))
    }

    /// Total capacity of the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Logical length: bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writer
    }

    /// True if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writer == 0
    }

    /// Capacity left past the writer cursor.
    #[must_use]
    pub fn writable_bytes(&self) -> usize {
        self.storage.len() - self.writer
    }

    /// True if at least one byte can be written without growing.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.writable_bytes() > 0
    }

    /// Zero the storage and reset both cursors. Capacity is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.storage.fill(0);
        self.reader = 0;
        self.writer = 0;
        self
    }

    /// Copy of the logical content `storage[0..writer]`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.storage[..self.writer].to_vec()
    }

    /// Lossy UTF-8 view of the logical content.
    #[must_use]
    pub fn to_utf8(&self) -> String {
        codec::utf8(&self.storage[..self.writer])
    }

    /// Lowercase hex of the logical content.
    #[must_use]
    pub fn to_hex(&self) -> String {
        codec::to_hex(&self.storage[..self.writer])
    }

    /// Standard base64 of the logical content.
    #[must_use]
    pub fn to_base64(&self) -> String {
        codec::to_base64(&self.storage[..self.writer])
    }

    /// Stream the logical content into `sink`.
    pub fn to_writer<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.storage[..self.writer])
    }

    /// Logical content as a value buffer.
    #[must_use]
    pub fn freeze(&self) -> Bytes {
        Bytes::from_slice(&self.storage[..self.writer])
    }

    /// Relaxed comparison against any raw byte sequence or buffer-like.
    pub fn content_eq(&self, other: impl AsRef<[u8]>) -> bool {
        self.storage[..self.writer] == *other.as_ref()
    }
}

impl RawBytes for GrowBuf {
    fn raw(&self) -> &[u8] {
        &self.storage
    }

    fn read_limit(&self) -> usize {
        self.writer
    }

    fn reader(&self) -> usize {
        self.reader
    }

    fn set_reader(&mut self, index: usize) {
        self.reader = index;
    }
}

impl Default for GrowBuf {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is over logical contents only; cursors and capacity are
// bookkeeping, not value.
impl PartialEq for GrowBuf {
    fn eq(&self, other: &Self) -> bool {
        self.storage[..self.writer] == other.storage[..other.writer]
    }
}

impl Eq for GrowBuf {}

impl fmt::Debug for GrowBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowBuf")
            .field("content", &self.to_hex())
            .field("reader", &self.reader)
            .field("writer", &self.writer)
            .field("capacity", &self.storage.len())
            .finish()
    }
}

impl fmt::Display for GrowBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

impl AsRef<[u8]> for GrowBuf {
    fn as_ref(&self) -> &[u8] {
        &self.storage[..self.writer]
    }
}

impl From<Vec<u8>> for GrowBuf {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for GrowBuf {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<&str> for GrowBuf {
    fn from(text: &str) -> Self {
        Self::from_utf8(text)
    }
}
