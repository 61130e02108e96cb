//! Width-polymorphic entry points.
//!
//! These take the byte length as an argument and route to the fixed-width
//! method for it.  Unlike the fixed-width methods, a missing offset is an
//! error here rather than defaulting to the start of the buffer.

use crate::arg::{Num, NumArg};
use crate::buffer::FastBuffer;
use crate::errors::{CodecError, CodecResult};
use crate::types::ByteWidth;

fn require_offset(offset: impl NumArg) -> CodecResult<Num> {
    offset.into_num().ok_or(CodecError::InvalidArgType {
        name: "offset",
        received: "None",
    })
}

impl<B: AsRef<[u8]>> FastBuffer<B> {
    /// Reads an unsigned little-endian integer of `byte_length` bytes.
    pub fn read_uint_le(&self, offset: impl NumArg, byte_length: impl NumArg) -> CodecResult<u64> {
        let offset = require_offset(offset)?;
        Ok(match ByteWidth::from_arg(byte_length)? {
            ByteWidth::W1 => self.read_uint8(offset)?.into(),
            ByteWidth::W2 => self.read_uint16_le(offset)?.into(),
            ByteWidth::W3 => self.read_uint24_le(offset)?.into(),
            ByteWidth::W4 => self.read_uint32_le(offset)?.into(),
            ByteWidth::W5 => self.read_uint40_le(offset)?,
            ByteWidth::W6 => self.read_uint48_le(offset)?,
        })
    }

    /// Reads an unsigned big-endian integer of `byte_length` bytes.
    pub fn read_uint_be(&self, offset: impl NumArg, byte_length: impl NumArg) -> CodecResult<u64> {
        let offset = require_offset(offset)?;
        Ok(match ByteWidth::from_arg(byte_length)? {
            ByteWidth::W1 => self.read_uint8(offset)?.into(),
            ByteWidth::W2 => self.read_uint16_be(offset)?.into(),
            ByteWidth::W3 => self.read_uint24_be(offset)?.into(),
            ByteWidth::W4 => self.read_uint32_be(offset)?.into(),
            ByteWidth::W5 => self.read_uint40_be(offset)?,
            ByteWidth::W6 => self.read_uint48_be(offset)?,
        })
    }

    /// Reads a signed little-endian integer of `byte_length` bytes.
    pub fn read_int_le(&self, offset: impl NumArg, byte_length: impl NumArg) -> CodecResult<i64> {
        let offset = require_offset(offset)?;
        Ok(match ByteWidth::from_arg(byte_length)? {
            ByteWidth::W1 => self.read_int8(offset)?.into(),
            ByteWidth::W2 => self.read_int16_le(offset)?.into(),
            ByteWidth::W3 => self.read_int24_le(offset)?.into(),
            ByteWidth::W4 => self.read_int32_le(offset)?.into(),
            ByteWidth::W5 => self.read_int40_le(offset)?,
            ByteWidth::W6 => self.read_int48_le(offset)?,
        })
    }

    /// Reads a signed big-endian integer of `byte_length` bytes.
    pub fn read_int_be(&self, offset: impl NumArg, byte_length: impl NumArg) -> CodecResult<i64> {
        let offset = require_offset(offset)?;
        Ok(match ByteWidth::from_arg(byte_length)? {
            ByteWidth::W1 => self.read_int8(offset)?.into(),
            ByteWidth::W2 => self.read_int16_be(offset)?.into(),
            ByteWidth::W3 => self.read_int24_be(offset)?.into(),
            ByteWidth::W4 => self.read_int32_be(offset)?.into(),
            ByteWidth::W5 => self.read_int40_be(offset)?,
            ByteWidth::W6 => self.read_int48_be(offset)?,
        })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FastBuffer<B> {
    /// Writes an unsigned little-endian integer of `byte_length` bytes,
    /// returning the offset past it.
    pub fn write_uint_le(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
        byte_length: impl NumArg,
    ) -> CodecResult<usize> {
        let width = ByteWidth::from_arg(byte_length)?;
        let offset = require_offset(offset)?;
        match width {
            ByteWidth::W1 => self.write_uint8(value, offset),
            ByteWidth::W2 => self.write_uint16_le(value, offset),
            ByteWidth::W3 => self.write_uint24_le(value, offset),
            ByteWidth::W4 => self.write_uint32_le(value, offset),
            ByteWidth::W5 => self.write_uint40_le(value, offset),
            ByteWidth::W6 => self.write_uint48_le(value, offset),
        }
    }

    /// Writes an unsigned big-endian integer of `byte_length` bytes, returning
    /// the offset past it.
    pub fn write_uint_be(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
        byte_length: impl NumArg,
    ) -> CodecResult<usize> {
        let width = ByteWidth::from_arg(byte_length)?;
        let offset = require_offset(offset)?;
        match width {
            ByteWidth::W1 => self.write_uint8(value, offset),
            ByteWidth::W2 => self.write_uint16_be(value, offset),
            ByteWidth::W3 => self.write_uint24_be(value, offset),
            ByteWidth::W4 => self.write_uint32_be(value, offset),
            ByteWidth::W5 => self.write_uint40_be(value, offset),
            ByteWidth::W6 => self.write_uint48_be(value, offset),
        }
    }

    /// Writes a signed little-endian integer of `byte_length` bytes, returning
    /// the offset past it.
    pub fn write_int_le(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
        byte_length: impl NumArg,
    ) -> CodecResult<usize> {
        let width = ByteWidth::from_arg(byte_length)?;
        let offset = require_offset(offset)?;
        match width {
            ByteWidth::W1 => self.write_int8(value, offset),
            ByteWidth::W2 => self.write_int16_le(value, offset),
            ByteWidth::W3 => self.write_int24_le(value, offset),
            ByteWidth::W4 => self.write_int32_le(value, offset),
            ByteWidth::W5 => self.write_int40_le(value, offset),
            ByteWidth::W6 => self.write_int48_le(value, offset),
        }
    }

    /// Writes a signed big-endian integer of `byte_length` bytes, returning
    /// the offset past it.
    pub fn write_int_be(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
        byte_length: impl NumArg,
    ) -> CodecResult<usize> {
        let width = ByteWidth::from_arg(byte_length)?;
        let offset = require_offset(offset)?;
        match width {
            ByteWidth::W1 => self.write_int8(value, offset),
            ByteWidth::W2 => self.write_int16_be(value, offset),
            ByteWidth::W3 => self.write_int24_be(value, offset),
            ByteWidth::W4 => self.write_int32_be(value, offset),
            ByteWidth::W5 => self.write_int40_be(value, offset),
            ByteWidth::W6 => self.write_int48_be(value, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_unsupported_byte_length() {
        let buf = FastBuffer::zeroed(16);
        for bad in [0, 7, 8, -1] {
            let e = buf.read_uint_le(0, bad).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::OutOfBounds, "byte length {bad}");
            assert!(e.to_string().contains(">= 1 and <= 6"));
        }

        assert_eq!(
            buf.read_int_be(0, 1.5).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            buf.read_uint_be(0, None::<usize>).unwrap_err().kind(),
            ErrorKind::InvalidType
        );
    }

    #[test]
    fn test_missing_offset() {
        let mut buf = FastBuffer::zeroed(8);
        let e = buf.read_uint_le(None::<usize>, 2).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidType);

        // Checked even before an unsupported byte length.
        let e = buf.read_int_le(None::<usize>, 9).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidType);

        let e = buf.write_uint_be(1, None::<usize>, 2).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_routes_to_width() {
        let mut buf = FastBuffer::zeroed(6);
        for width in ByteWidth::ALL {
            let n = width.byte_len();
            buf.as_bytes_mut().fill(0);

            let end = buf.write_uint_le(width.uint_max(), 0, n).unwrap();
            assert_eq!(end, n);
            assert!(buf.as_bytes()[..n].iter().all(|&b| b == 0xff));
            assert!(buf.as_bytes()[n..].iter().all(|&b| b == 0));

            assert_eq!(buf.read_uint_le(0, n).unwrap(), width.uint_max() as u64);
            assert_eq!(buf.read_uint_be(0, n).unwrap(), width.uint_max() as u64);
            assert_eq!(buf.read_int_le(0, n).unwrap(), -1);
            assert_eq!(buf.read_int_be(0, n).unwrap(), -1);
        }
    }

    #[test]
    fn test_signed_dispatch_orders() {
        let mut buf = FastBuffer::zeroed(5);
        buf.write_int_be(-0x1234, 0, 3).unwrap();
        assert_eq!(buf.as_bytes()[..3], [0xff, 0xed, 0xcc]);
        assert_eq!(buf.read_int_be(0, 3).unwrap(), -0x1234);

        buf.write_int_le(-0x1234, 0, 5).unwrap();
        assert_eq!(buf.as_bytes(), &[0xcc, 0xed, 0xff, 0xff, 0xff]);
        assert_eq!(buf.read_int_le(0, 5).unwrap(), -0x1234);
    }

    #[test]
    fn test_range_per_width() {
        let mut buf = FastBuffer::zeroed(6);
        for width in ByteWidth::ALL {
            let n = width.byte_len();
            assert!(buf.write_int_le(width.int_min(), 0, n).is_ok());
            assert!(buf.write_int_be(width.int_max(), 0, n).is_ok());

            let e = buf.write_int_le(width.int_min() - 1, 0, n).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::OutOfRange);
            let e = buf.write_int_be(width.int_max() + 1, 0, n).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::OutOfRange);
            let e = buf.write_uint_le(width.uint_max() + 1, 0, n).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::OutOfRange);
            let e = buf.write_uint_be(-1, 0, n).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::OutOfRange);
        }
    }
}
