//! Integer layout descriptors.
//!
//! An [`IntFormat`] names a width, signedness and byte order in one value, so
//! callers can configure a layout once (or load it from a config file in its
//! compact string form, like `u48le` or `i24be`) and apply it to buffers.

use std::fmt;
use std::str;

use crate::arg::NumArg;
use crate::buffer::FastBuffer;
use crate::errors::CodecResult;
use crate::types::{ByteWidth, Endian, Signedness};

/// Describes how an integer is laid out in a buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IntFormat {
    width: ByteWidth,
    signedness: Signedness,
    endian: Endian,
}

impl IntFormat {
    /// Constructs a new instance.
    pub const fn new(width: ByteWidth, signedness: Signedness, endian: Endian) -> Self {
        Self {
            width,
            signedness,
            endian,
        }
    }

    /// Gets the width.
    pub const fn width(&self) -> ByteWidth {
        self.width
    }

    /// Gets the signedness.
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Gets the byte order.
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Convenience function for returning the encoded length in bytes.
    pub const fn byte_len(&self) -> usize {
        self.width.byte_len()
    }

    /// Smallest value representable in this format.
    pub const fn min(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => 0,
            Signedness::Signed => self.width.int_min(),
        }
    }

    /// Largest value representable in this format.
    pub const fn max(&self) -> i64 {
        match self.signedness {
            Signedness::Unsigned => self.width.uint_max(),
            Signedness::Signed => self.width.int_max(),
        }
    }

    /// Reads a value in this format from the buffer.
    ///
    /// Every supported value fits in an `i64`, signed or not.
    pub fn read<B: AsRef<[u8]>>(&self, buf: &FastBuffer<B>, offset: impl NumArg) -> CodecResult<i64> {
        let n = self.byte_len();
        match (self.signedness, self.endian) {
            (Signedness::Unsigned, Endian::Little) => Ok(buf.read_uint_le(offset, n)? as i64),
            (Signedness::Unsigned, Endian::Big) => Ok(buf.read_uint_be(offset, n)? as i64),
            (Signedness::Signed, Endian::Little) => buf.read_int_le(offset, n),
            (Signedness::Signed, Endian::Big) => buf.read_int_be(offset, n),
        }
    }

    /// Writes a value in this format to the buffer, returning the offset just
    /// past it.
    pub fn write<B: AsRef<[u8]> + AsMut<[u8]>>(
        &self,
        buf: &mut FastBuffer<B>,
        value: impl NumArg,
        offset: impl NumArg,
    ) -> CodecResult<usize> {
        let n = self.byte_len();
        match (self.signedness, self.endian) {
            (Signedness::Unsigned, Endian::Little) => buf.write_uint_le(value, offset, n),
            (Signedness::Unsigned, Endian::Big) => buf.write_uint_be(value, offset, n),
            (Signedness::Signed, Endian::Little) => buf.write_int_le(value, offset, n),
            (Signedness::Signed, Endian::Big) => buf.write_int_be(value, offset, n),
        }
    }

    /// Packs the format into a single byte: width in the low 3 bits, then a
    /// signed bit and a big-endian bit.
    pub const fn to_tag(&self) -> u8 {
        let mut tag = self.width.byte_len() as u8;
        if matches!(self.signedness, Signedness::Signed) {
            tag |= 0x08;
        }
        if matches!(self.endian, Endian::Big) {
            tag |= 0x10;
        }
        tag
    }

    /// Unpacks a format from [`IntFormat::to_tag`] output.
    pub fn from_tag(tag: u8) -> Result<Self, InvalidIntFormat> {
        if tag & !0x1f != 0 {
            return Err(InvalidIntFormat::BadTag(tag));
        }
        let width = ByteWidth::try_from(usize::from(tag & 0x07))
            .map_err(|_| InvalidIntFormat::BadTag(tag))?;
        let signedness = if tag & 0x08 != 0 {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        };
        let endian = if tag & 0x10 != 0 {
            Endian::Big
        } else {
            Endian::Little
        };
        Ok(Self::new(width, signedness, endian))
    }
}

impl fmt::Display for IntFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.signedness {
            Signedness::Unsigned => 'u',
            Signedness::Signed => 'i',
        };
        let order = match self.endian {
            Endian::Little => "le",
            Endian::Big => "be",
        };
        write!(f, "{sign}{}{order}", self.width.bits())
    }
}

impl str::FromStr for IntFormat {
    type Err = InvalidIntFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (signedness, rest) = match s.split_at_checked(1) {
            Some(("u", rest)) => (Signedness::Unsigned, rest),
            Some(("i", rest)) => (Signedness::Signed, rest),
            _ => return Err(InvalidIntFormat::BadSign),
        };

        let (bits, endian) = if let Some(bits) = rest.strip_suffix("le") {
            (bits, Endian::Little)
        } else if let Some(bits) = rest.strip_suffix("be") {
            (bits, Endian::Big)
        } else {
            (rest, Endian::Little)
        };

        let width = match bits {
            "8" => ByteWidth::W1,
            "16" => ByteWidth::W2,
            "24" => ByteWidth::W3,
            "32" => ByteWidth::W4,
            "40" => ByteWidth::W5,
            "48" => ByteWidth::W6,
            _ => return Err(InvalidIntFormat::BadWidth),
        };

        // Byte order is meaningless for single bytes, everything else has to
        // spell it out.
        let explicit = rest.len() != bits.len();
        if !explicit && width != ByteWidth::W1 {
            return Err(InvalidIntFormat::MissingEndian);
        }

        Ok(Self::new(width, signedness, endian))
    }
}

/// Error type for invalid integer format strings and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidIntFormat {
    /// The string did not start with `u` or `i`.
    BadSign,
    /// The bit count was not one of 8, 16, 24, 32, 40 or 48.
    BadWidth,
    /// A multi-byte format did not end in `le` or `be`.
    MissingEndian,
    /// A packed tag had unknown bits set or an unsupported width.
    BadTag(u8),
}

impl fmt::Display for InvalidIntFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadSign => write!(f, "int format must start with 'u' or 'i'"),
            Self::BadWidth => write!(f, "int format width must be one of 8, 16, 24, 32, 40, 48"),
            Self::MissingEndian => write!(f, "multi-byte int format must end in 'le' or 'be'"),
            Self::BadTag(tag) => write!(f, "invalid int format tag {tag:#04x}"),
        }
    }
}

impl std::error::Error for InvalidIntFormat {}
