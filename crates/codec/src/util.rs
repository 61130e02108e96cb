//! High-level util functions.

use crate::arg::NumArg;
use crate::bounds::{check_int, check_offset};
use crate::{CodecResult, FastBuffer, IntFormat};

/// Encodes a single value into a newly allocated vec.
pub fn encode_to_vec(format: IntFormat, value: impl NumArg) -> CodecResult<Vec<u8>> {
    let mut buf = FastBuffer::zeroed(format.byte_len());
    format.write(&mut buf, value, 0)?;
    Ok(buf.into_inner())
}

/// Reads `count` consecutive values starting at `offset`.
pub fn read_seq<B: AsRef<[u8]>>(
    buf: &FastBuffer<B>,
    format: IntFormat,
    offset: impl NumArg,
    count: usize,
) -> CodecResult<Vec<i64>> {
    let span = format.byte_len().saturating_mul(count);
    let mut at = check_offset(offset, buf.len(), span)?;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(format.read(buf, at)?);
        at += format.byte_len();
    }
    Ok(out)
}

/// Writes values back to back starting at `offset`, returning the offset just
/// past the last one.
///
/// Every value and the whole span are validated before the first byte is
/// written, so a failure leaves the buffer untouched.
pub fn write_seq<B, V>(
    buf: &mut FastBuffer<B>,
    format: IntFormat,
    values: impl IntoIterator<Item = V>,
    offset: impl NumArg,
) -> CodecResult<usize>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    V: NumArg,
{
    let values = values
        .into_iter()
        .map(|v| check_int(v, format.min(), format.max()))
        .collect::<CodecResult<Vec<_>>>()?;

    let span = format.byte_len().saturating_mul(values.len());
    let mut at = check_offset(offset, buf.len(), span)?;
    for v in values {
        at = format.write(buf, v, at)?;
    }
    Ok(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_encode_to_vec() {
        let fmt = "u24be".parse().unwrap();
        assert_eq!(encode_to_vec(fmt, 0x010203).unwrap(), vec![1, 2, 3]);

        let fmt = "i16le".parse().unwrap();
        assert_eq!(encode_to_vec(fmt, -2).unwrap(), vec![0xfe, 0xff]);
        assert!(encode_to_vec(fmt, 40000).is_err());
    }

    #[test]
    fn test_seq_roundtrip() {
        let fmt: IntFormat = "i40le".parse().unwrap();
        let mut buf = FastBuffer::zeroed(17);
        let values = [-1i64, 0, 0x7f_ffff_ffff];
        assert_eq!(write_seq(&mut buf, fmt, values, 2).unwrap(), 17);
        assert_eq!(read_seq(&buf, fmt, 2, 3).unwrap(), values.to_vec());
    }

    #[test]
    fn test_write_seq_all_or_nothing() {
        let fmt: IntFormat = "u16be".parse().unwrap();
        let mut buf = FastBuffer::zeroed(6);

        let e = write_seq(&mut buf, fmt, [1, 2, 0x10000], 0).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(buf.as_bytes(), &[0; 6]);

        let e = write_seq(&mut buf, fmt, [1, 2, 3], 2).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        assert_eq!(buf.as_bytes(), &[0; 6]);
    }

    #[test]
    fn test_read_seq_bounds() {
        let fmt: IntFormat = "u8".parse().unwrap();
        let buf = FastBuffer::new(vec![1u8, 2, 3]);
        assert_eq!(read_seq(&buf, fmt, 1, 2).unwrap(), vec![2, 3]);
        assert!(read_seq(&buf, fmt, 1, 3).is_err());
        assert_eq!(read_seq(&buf, fmt, 3, 0).unwrap(), Vec::<i64>::new());
    }
}
