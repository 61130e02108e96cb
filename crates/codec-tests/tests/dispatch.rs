//! Tests for the width-polymorphic entry points.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use fastbuf_codec::{ByteWidth, ErrorKind, FastBuffer};

#[test]
fn test_unsupported_widths() {
    let buf = FastBuffer::zeroed(16);
    for n in [0, 7] {
        let e = buf.read_uint_le(0, n).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        assert_eq!(
            e.to_string(),
            format!(
                "the value of \"byteLength\" is out of range, it must be >= 1 and <= 6, received {n}"
            )
        );
    }
}

#[test]
fn test_agrees_with_fixed_width() {
    let bytes = [0x81u8, 0x02, 0x03, 0x04, 0x05, 0x86, 0x07];
    let buf = FastBuffer::new(bytes);

    assert_eq!(buf.read_uint_le(1, 1).unwrap(), 0x02);
    assert_eq!(buf.read_int_be(0, 1).unwrap(), -127);
    assert_eq!(
        buf.read_uint_le(0, 2).unwrap(),
        u64::from(buf.read_uint16_le(0).unwrap())
    );
    assert_eq!(
        buf.read_int_be(1, 3).unwrap(),
        i64::from(buf.read_int24_be(1).unwrap())
    );
    assert_eq!(buf.read_uint_be(0, 4).unwrap(), 0x8102_0304);
    assert_eq!(buf.read_int_le(1, 5).unwrap(), buf.read_int40_le(1).unwrap());
    assert_eq!(buf.read_int_le(1, 6).unwrap(), 0x0786_0504_0302);
    assert_eq!(buf.read_int_be(0, 6).unwrap(), -0x7efd_fcfb_fa7a);
}

#[test]
fn test_write_every_width() {
    for width in ByteWidth::ALL {
        let n = width.byte_len();
        let mut buf = FastBuffer::zeroed(n + 2);

        assert_eq!(buf.write_int_le(width.int_min(), 2, n).unwrap(), n + 2);
        assert_eq!(buf.read_int_le(2, n).unwrap(), width.int_min());

        assert_eq!(buf.write_uint_be(width.uint_max(), 1, n).unwrap(), n + 1);
        assert_eq!(buf.read_uint_be(1, n).unwrap(), width.uint_max() as u64);

        let e = buf.write_int_be(width.int_max() + 1, 0, n).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        let e = buf.write_uint_le(0, 3, n).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    }
}

#[test]
fn test_offset_required() {
    let mut buf = FastBuffer::zeroed(4);
    let e = buf.read_uint_be(None::<usize>, 4).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidType);
    let e = buf.write_int_le(1, None::<usize>, 2).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidType);
    assert_eq!(buf.as_bytes(), &[0; 4]);
}
