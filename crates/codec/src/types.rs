use crate::arg::{Num, NumArg};
use crate::errors::{CodecError, CodecResult};

/// Largest supported integer width, in bytes.
pub const MAX_INT_WIDTH: usize = 6;

/// Byte order of a multi-byte value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,

    /// Most significant byte first.
    Big,
}

/// Whether an integer is read as two's complement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Signedness {
    /// Plain unsigned integer.
    Unsigned,

    /// Two's complement signed integer.
    Signed,
}

/// Width of an integer access, by the number of bytes it spans.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ByteWidth {
    /// 1 byte
    W1,

    /// 2 bytes
    W2,

    /// 3 bytes
    W3,

    /// 4 bytes
    W4,

    /// 5 bytes
    W5,

    /// 6 bytes
    W6,
}

impl ByteWidth {
    /// All widths, narrowest first.
    pub const ALL: [ByteWidth; MAX_INT_WIDTH] = [
        ByteWidth::W1,
        ByteWidth::W2,
        ByteWidth::W3,
        ByteWidth::W4,
        ByteWidth::W5,
        ByteWidth::W6,
    ];

    /// Returns the number of bytes spanned.
    pub const fn byte_len(self) -> usize {
        match self {
            ByteWidth::W1 => 1,
            ByteWidth::W2 => 2,
            ByteWidth::W3 => 3,
            ByteWidth::W4 => 4,
            ByteWidth::W5 => 5,
            ByteWidth::W6 => 6,
        }
    }

    /// Returns the number of bits spanned.
    pub const fn bits(self) -> u32 {
        self.byte_len() as u32 * 8
    }

    /// Largest unsigned value that fits.
    pub const fn uint_max(self) -> i64 {
        (1i64 << self.bits()) - 1
    }

    /// Smallest signed value that fits.
    pub const fn int_min(self) -> i64 {
        -(1i64 << (self.bits() - 1))
    }

    /// Largest signed value that fits.
    pub const fn int_max(self) -> i64 {
        (1i64 << (self.bits() - 1)) - 1
    }

    /// Resolves a loosely typed byte length argument.
    ///
    /// A missing argument is a type error, a fractional one a range error, and
    /// any integer outside `1..=6` is rejected as an unsupported width.
    pub fn from_arg(byte_length: impl NumArg) -> CodecResult<Self> {
        let num = byte_length
            .into_num()
            .ok_or(CodecError::InvalidArgType {
                name: "byteLength",
                received: "None",
            })?;

        let Some(n) = num.as_integer() else {
            return Err(CodecError::OutOfRange {
                name: "byteLength",
                range: "an integer".to_owned(),
                received: num,
            });
        };

        usize::try_from(n)
            .ok()
            .and_then(|n| Self::try_from(n).ok())
            .ok_or(CodecError::UnsupportedByteLength(num))
    }
}

impl TryFrom<usize> for ByteWidth {
    type Error = CodecError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ByteWidth::W1),
            2 => Ok(ByteWidth::W2),
            3 => Ok(ByteWidth::W3),
            4 => Ok(ByteWidth::W4),
            5 => Ok(ByteWidth::W5),
            6 => Ok(ByteWidth::W6),
            invalid => Err(CodecError::UnsupportedByteLength(Num::Int(invalid as i128))),
        }
    }
}

impl From<ByteWidth> for usize {
    fn from(width: ByteWidth) -> Self {
        width.byte_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_ranges() {
        assert_eq!(ByteWidth::W1.uint_max(), 0xff);
        assert_eq!(ByteWidth::W1.int_min(), -0x80);
        assert_eq!(ByteWidth::W3.int_max(), 0x7f_ffff);
        assert_eq!(ByteWidth::W4.uint_max(), 0xffff_ffff);
        assert_eq!(ByteWidth::W5.int_min(), -0x80_0000_0000);
        assert_eq!(ByteWidth::W6.uint_max(), 0xffff_ffff_ffff);
        assert_eq!(ByteWidth::W6.int_max(), 0x7fff_ffff_ffff);
    }

    #[test]
    fn test_try_from() {
        for w in ByteWidth::ALL {
            assert_eq!(ByteWidth::try_from(w.byte_len()).unwrap(), w);
        }
        assert!(ByteWidth::try_from(0).is_err());
        assert!(ByteWidth::try_from(7).is_err());
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(ByteWidth::from_arg(3).unwrap(), ByteWidth::W3);
        assert_eq!(ByteWidth::from_arg(6.0).unwrap(), ByteWidth::W6);

        let e = ByteWidth::from_arg(7).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        let e = ByteWidth::from_arg(-1).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);

        let e = ByteWidth::from_arg(2.5).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfRange);

        let e = ByteWidth::from_arg(None::<u8>).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidType);
    }
}
