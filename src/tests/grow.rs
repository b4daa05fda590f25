use crate::{BigInt, BufError, Bytes, GrowBuf, ReadBytes};

#[test]
fn allocate_starts_with_both_cursors_at_zero() {
    let buf = GrowBuf::allocate(16);
    assert_eq!(buf.capacity(), 16);
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.readable_bytes(), 0);
    assert_eq!(buf.writable_bytes(), 16);
    assert!(!buf.is_readable());
    assert!(buf.is_writable());
}

#[test]
fn write_then_read_int_scenario() {
    let mut buf = GrowBuf::allocate(4);
    buf.write_int(258i32);
    assert_eq!(buf.readable_bytes(), 4);
    assert_eq!(buf.read_int::<i32>().unwrap(), 258);
    assert_eq!(buf.readable_bytes(), 0);
}

#[test]
fn write_at_cursor_advances_writer() {
    let mut buf = GrowBuf::allocate(16);
    buf.write_bytes(b"abc");
    assert_eq!(buf.len(), 3);
    buf.write_bytes(b"de");
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.to_vec(), b"abcde");
}

#[test]
fn write_at_explicit_offset_leaves_writer_untouched() {
    let mut buf = GrowBuf::allocate(16);
    buf.write_bytes(b"ab");
    buf.write_bytes_at(8, b"zz");
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.to_vec(), b"ab");
}

#[test]
fn growth_preserves_written_bytes() {
    let mut buf = GrowBuf::allocate(2);
    let mut expected = Vec::new();
    for chunk in 0u8..10 {
        let bytes = [chunk; 50];
        buf.write_bytes(&bytes);
        expected.extend_from_slice(&bytes);
    }
    assert_eq!(buf.to_vec(), expected);
    assert_eq!(buf.len(), 500);
    assert_eq!(buf.readable_bytes(), 500);
    assert_eq!(buf.writable_bytes(), buf.capacity() - 500);
}

#[test]
fn growth_triggers_when_write_exactly_reaches_capacity() {
    let mut buf = GrowBuf::allocate(4);
    buf.write_bytes(&[1, 2, 3, 4]);
    // max(4, 32) + 32 * 4 extra on top of the old capacity
    assert_eq!(buf.capacity(), 4 + 32 + 128);
    assert_eq!(buf.to_vec(), [1, 2, 3, 4]);
}

#[test]
fn read_at_cursor_advances_reader() {
    let mut buf = GrowBuf::from_slice(b"abcdef");
    assert_eq!(buf.read_bytes(2).unwrap(), b"ab");
    assert_eq!(buf.read_bytes(2).unwrap(), b"cd");
    assert_eq!(buf.readable_bytes(), 2);
}

#[test]
fn read_at_explicit_index_leaves_reader_untouched() {
    let mut buf = GrowBuf::from_slice(b"abcdef");
    assert_eq!(buf.read_bytes_at(4, 2).unwrap(), b"ef");
    assert_eq!(buf.readable_bytes(), 6);
    assert_eq!(buf.read_bytes(1).unwrap(), b"a");
}

#[test]
fn read_past_writer_is_out_of_range() {
    let mut buf = GrowBuf::allocate(8);
    buf.write_bytes(b"ab");
    let err = buf.read_bytes(3).unwrap_err();
    assert_eq!(
        err,
        BufError::OutOfRange {
            start: 0,
            end: 3,
            available: 2,
        }
    );
    // no partial read: cursor did not move
    assert_eq!(buf.readable_bytes(), 2);
}

#[test]
fn signed_and_unsigned_short_decoding() {
    let mut buf = GrowBuf::from_slice(&[0xFF, 0xFF]);
    assert_eq!(buf.read_int_at::<i16>(0).unwrap(), -1);
    assert_eq!(buf.read_int_at::<u16>(0).unwrap(), 65535);
}

#[test]
fn signed_width_roundtrips() {
    let mut buf = GrowBuf::new();
    buf.write_int(i8::MIN)
        .write_int(i16::MAX)
        .write_int(-123_456i32)
        .write_int(i64::MIN);
    assert_eq!(buf.len(), 1 + 2 + 4 + 8);
    assert_eq!(buf.read_int::<i8>().unwrap(), i8::MIN);
    assert_eq!(buf.read_int::<i16>().unwrap(), i16::MAX);
    assert_eq!(buf.read_int::<i32>().unwrap(), -123_456);
    assert_eq!(buf.read_int::<i64>().unwrap(), i64::MIN);
}

#[test]
fn unsigned_writes_widen_to_next_signed_width() {
    let mut buf = GrowBuf::new();
    buf.write_int(5u8);
    assert_eq!(buf.to_vec(), [0, 0, 0, 5]);

    let mut buf = GrowBuf::new();
    buf.write_int(0xBEEFu16);
    assert_eq!(buf.to_vec(), [0, 0, 0xBE, 0xEF]);

    let mut buf = GrowBuf::new();
    buf.write_int(0xDEAD_BEEFu32);
    assert_eq!(buf.to_vec(), [0, 0, 0, 0, 0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn unsigned_reads_take_the_natural_width() {
    // The write side widens, so unsigned roundtrips resume at the
    // widening offset rather than at the write position.
    let mut buf = GrowBuf::new();
    buf.write_int(0xBEEFu16);
    assert_eq!(buf.read_int_at::<u16>(2).unwrap(), 0xBEEF);

    let mut buf = GrowBuf::new();
    buf.write_int(0xDEAD_BEEFu32);
    assert_eq!(buf.read_int_at::<u32>(4).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn unsigned_long_writes_minimal_twos_complement() {
    let mut buf = GrowBuf::new();
    buf.write_int(u64::MAX);
    // sign byte plus eight 0xFF magnitude bytes
    let mut expected = vec![0u8];
    expected.extend_from_slice(&[0xFF; 8]);
    assert_eq!(buf.to_vec(), expected);
    assert_eq!(buf.read_int_at::<u64>(1).unwrap(), u64::MAX);

    let mut buf = GrowBuf::new();
    buf.write_int(5u64);
    assert_eq!(buf.to_vec(), [5]);
}

#[test]
fn bigint_write_and_read() {
    let mut buf = GrowBuf::new();
    buf.write_bigint(&BigInt::from(-1));
    assert_eq!(buf.to_vec(), [0xFF]);
    assert_eq!(buf.read_bigint(1).unwrap(), BigInt::from(-1));

    let mut buf = GrowBuf::new();
    buf.write_bigint(&BigInt::from(258));
    assert_eq!(buf.to_vec(), [1, 2]);
    assert_eq!(buf.read_bigint_unsigned_at(0, 2).unwrap(), 258u32.into());
}

#[test]
fn clear_zeroes_storage_and_keeps_capacity() {
    let mut buf = GrowBuf::allocate(64);
    buf.write_bytes(b"secret");
    buf.read_bytes(2).unwrap();
    buf.clear();
    assert_eq!(buf.capacity(), 64);
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.readable_bytes(), 0);
    assert!(buf.to_vec().is_empty());
}

#[test]
fn to_vec_returns_logical_content_only() {
    let mut buf = GrowBuf::allocate(32);
    buf.write_bytes(b"abc");
    assert_eq!(buf.to_vec(), b"abc");
}

#[test]
fn hex_and_base64_roundtrips() {
    let buf = GrowBuf::from_hex("deadbeef").unwrap();
    assert_eq!(buf.to_hex(), "deadbeef");
    assert_eq!(GrowBuf::from_hex(&buf.to_hex()).unwrap(), buf);

    let buf = GrowBuf::from_utf8("hello");
    assert_eq!(buf.to_base64(), "aGVsbG8=");
    assert_eq!(GrowBuf::from_base64(&buf.to_base64()).unwrap(), buf);
}

#[test]
fn hex_decode_is_case_insensitive() {
    assert_eq!(
        GrowBuf::from_hex("DEADbeef").unwrap().to_hex(),
        "deadbeef"
    );
}

#[test]
fn equality_ignores_cursors_and_capacity() {
    let a = GrowBuf::from_slice(b"ab");
    let mut b = GrowBuf::allocate(50);
    b.write_bytes(b"ab");
    assert_eq!(a, b);

    let mut c = a.clone();
    c.read_bytes(1).unwrap();
    assert_eq!(a, c);
}

#[test]
fn content_eq_accepts_raw_bytes_and_other_buffers() {
    let mut buf = GrowBuf::allocate(8);
    buf.write_bytes(b"ab");
    assert!(buf.content_eq(b"ab"));
    assert!(buf.content_eq(Bytes::from_utf8("ab")));
    assert!(!buf.content_eq(b"abc"));
}

#[test]
fn from_opt_absent_is_empty() {
    assert!(GrowBuf::from_opt(None::<&str>).is_empty());
    assert_eq!(GrowBuf::from_opt(Some("hi")).to_vec(), b"hi");
}

#[test]
fn random_buffers_have_requested_length_and_differ() {
    let a = GrowBuf::random(32);
    let b = GrowBuf::random(32);
    assert_eq!(a.len(), 32);
    assert_eq!(b.len(), 32);
    assert_ne!(a, b);
}

#[test]
fn to_writer_streams_logical_content() {
    let mut buf = GrowBuf::allocate(16);
    buf.write_bytes(b"abc");
    let mut sink = Vec::new();
    buf.to_writer(&mut sink).unwrap();
    assert_eq!(sink, b"abc");
}

#[test]
fn read_buffer_yields_new_buffer_and_advances() {
    let mut buf = GrowBuf::from_slice(b"abcd");
    let head = buf.read_buffer(2).unwrap();
    assert_eq!(head.to_vec(), b"ab");
    assert_eq!(buf.readable_bytes(), 2);
}

#[test]
fn remaining_reads_to_the_writer_cursor() {
    let mut buf = GrowBuf::allocate(64);
    buf.write_bytes(b"abcdef");
    buf.read_bytes(2).unwrap();
    assert_eq!(buf.remaining().unwrap(), b"cdef");
    assert!(!buf.is_readable());
}

#[test]
fn freeze_captures_logical_content() {
    let mut buf = GrowBuf::allocate(32);
    buf.write_bytes(b"abc");
    let frozen = buf.freeze();
    assert_eq!(frozen, Bytes::from_utf8("abc"));
}
