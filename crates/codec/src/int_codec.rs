//! Fixed-width integer reads and writes.
//!
//! Widths 1, 3, 5 and 6 are assembled byte by byte.  The native 16 and 32-bit
//! reads go through the buffer's raw view.  Writes are always byte by byte,
//! and only happen after both the value and the offset have been validated.

use crate::buffer::FastBuffer;
use crate::types::{ByteWidth, Endian};

/// Assembles `N` bytes starting at `at`, least significant first.
pub(crate) fn load_le<const N: usize>(bytes: &[u8], at: usize) -> u64 {
    bytes[at..at + N]
        .iter()
        .rev()
        .fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

/// Assembles `N` bytes starting at `at`, most significant first.
pub(crate) fn load_be<const N: usize>(bytes: &[u8], at: usize) -> u64 {
    bytes[at..at + N]
        .iter()
        .fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

/// Reinterprets the low `N` bytes of `raw` as two's complement.
pub(crate) fn sign_extend<const N: usize>(raw: u64) -> i64 {
    let shift = 64 - 8 * N as u32;
    ((raw << shift) as i64) >> shift
}

/// Writes the low `N` bytes of `raw` starting at `at`, least significant first.
pub(crate) fn store_le<const N: usize>(bytes: &mut [u8], at: usize, raw: u64) {
    for (i, slot) in bytes[at..at + N].iter_mut().enumerate() {
        *slot = (raw >> (8 * i)) as u8;
    }
}

/// Writes the low `N` bytes of `raw` starting at `at`, most significant first.
pub(crate) fn store_be<const N: usize>(bytes: &mut [u8], at: usize, raw: u64) {
    for (i, slot) in bytes[at..at + N].iter_mut().rev().enumerate() {
        *slot = (raw >> (8 * i)) as u8;
    }
}

impl<B: AsRef<[u8]>> FastBuffer<B> {
    impl_fixed_read! {
        /// Reads an unsigned 8-bit integer.
        read_uint8 -> u8, 1, |buf, at| buf.as_bytes()[at]
    }

    impl_fixed_read! {
        /// Reads an unsigned little-endian 16-bit integer.
        read_uint16_le -> u16, 2, |buf, at| buf.view().get_uint16(buf.storage(), at, Endian::Little)
    }

    impl_fixed_read! {
        /// Reads an unsigned big-endian 16-bit integer.
        read_uint16_be -> u16, 2, |buf, at| buf.view().get_uint16(buf.storage(), at, Endian::Big)
    }

    impl_fixed_read! {
        /// Reads an unsigned little-endian 24-bit integer.
        read_uint24_le -> u32, 3, |buf, at| load_le::<3>(buf.as_bytes(), at) as u32
    }

    impl_fixed_read! {
        /// Reads an unsigned big-endian 24-bit integer.
        read_uint24_be -> u32, 3, |buf, at| load_be::<3>(buf.as_bytes(), at) as u32
    }

    impl_fixed_read! {
        /// Reads an unsigned little-endian 32-bit integer.
        read_uint32_le -> u32, 4, |buf, at| buf.view().get_uint32(buf.storage(), at, Endian::Little)
    }

    impl_fixed_read! {
        /// Reads an unsigned big-endian 32-bit integer.
        read_uint32_be -> u32, 4, |buf, at| buf.view().get_uint32(buf.storage(), at, Endian::Big)
    }

    impl_fixed_read! {
        /// Reads an unsigned little-endian 40-bit integer.
        read_uint40_le -> u64, 5, |buf, at| load_le::<5>(buf.as_bytes(), at)
    }

    impl_fixed_read! {
        /// Reads an unsigned big-endian 40-bit integer.
        read_uint40_be -> u64, 5, |buf, at| load_be::<5>(buf.as_bytes(), at)
    }

    impl_fixed_read! {
        /// Reads an unsigned little-endian 48-bit integer.
        read_uint48_le -> u64, 6, |buf, at| load_le::<6>(buf.as_bytes(), at)
    }

    impl_fixed_read! {
        /// Reads an unsigned big-endian 48-bit integer.
        read_uint48_be -> u64, 6, |buf, at| load_be::<6>(buf.as_bytes(), at)
    }

    impl_fixed_read! {
        /// Reads a signed 8-bit integer.
        read_int8 -> i8, 1, |buf, at| buf.as_bytes()[at] as i8
    }

    impl_fixed_read! {
        /// Reads a signed little-endian 16-bit integer.
        read_int16_le -> i16, 2, |buf, at| buf.view().get_int16(buf.storage(), at, Endian::Little)
    }

    impl_fixed_read! {
        /// Reads a signed big-endian 16-bit integer.
        read_int16_be -> i16, 2, |buf, at| buf.view().get_int16(buf.storage(), at, Endian::Big)
    }

    impl_fixed_read! {
        /// Reads a signed little-endian 24-bit integer.
        read_int24_le -> i32, 3, |buf, at| sign_extend::<3>(load_le::<3>(buf.as_bytes(), at)) as i32
    }

    impl_fixed_read! {
        /// Reads a signed big-endian 24-bit integer.
        read_int24_be -> i32, 3, |buf, at| sign_extend::<3>(load_be::<3>(buf.as_bytes(), at)) as i32
    }

    impl_fixed_read! {
        /// Reads a signed little-endian 32-bit integer.
        read_int32_le -> i32, 4, |buf, at| buf.view().get_int32(buf.storage(), at, Endian::Little)
    }

    impl_fixed_read! {
        /// Reads a signed big-endian 32-bit integer.
        read_int32_be -> i32, 4, |buf, at| buf.view().get_int32(buf.storage(), at, Endian::Big)
    }

    impl_fixed_read! {
        /// Reads a signed little-endian 40-bit integer.
        read_int40_le -> i64, 5, |buf, at| sign_extend::<5>(load_le::<5>(buf.as_bytes(), at))
    }

    impl_fixed_read! {
        /// Reads a signed big-endian 40-bit integer.
        read_int40_be -> i64, 5, |buf, at| sign_extend::<5>(load_be::<5>(buf.as_bytes(), at))
    }

    impl_fixed_read! {
        /// Reads a signed little-endian 48-bit integer.
        read_int48_le -> i64, 6, |buf, at| sign_extend::<6>(load_le::<6>(buf.as_bytes(), at))
    }

    impl_fixed_read! {
        /// Reads a signed big-endian 48-bit integer.
        read_int48_be -> i64, 6, |buf, at| sign_extend::<6>(load_be::<6>(buf.as_bytes(), at))
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FastBuffer<B> {
    impl_fixed_write! {
        /// Writes an unsigned 8-bit integer.
        write_uint8, 1, 0 => ByteWidth::W1.uint_max(), store_le::<1>
    }

    impl_fixed_write! {
        /// Writes an unsigned little-endian 16-bit integer.
        write_uint16_le, 2, 0 => ByteWidth::W2.uint_max(), store_le::<2>
    }

    impl_fixed_write! {
        /// Writes an unsigned big-endian 16-bit integer.
        write_uint16_be, 2, 0 => ByteWidth::W2.uint_max(), store_be::<2>
    }

    impl_fixed_write! {
        /// Writes an unsigned little-endian 24-bit integer.
        write_uint24_le, 3, 0 => ByteWidth::W3.uint_max(), store_le::<3>
    }

    impl_fixed_write! {
        /// Writes an unsigned big-endian 24-bit integer.
        write_uint24_be, 3, 0 => ByteWidth::W3.uint_max(), store_be::<3>
    }

    impl_fixed_write! {
        /// Writes an unsigned little-endian 32-bit integer.
        write_uint32_le, 4, 0 => ByteWidth::W4.uint_max(), store_le::<4>
    }

    impl_fixed_write! {
        /// Writes an unsigned big-endian 32-bit integer.
        write_uint32_be, 4, 0 => ByteWidth::W4.uint_max(), store_be::<4>
    }

    impl_fixed_write! {
        /// Writes an unsigned little-endian 40-bit integer.
        write_uint40_le, 5, 0 => ByteWidth::W5.uint_max(), store_le::<5>
    }

    impl_fixed_write! {
        /// Writes an unsigned big-endian 40-bit integer.
        write_uint40_be, 5, 0 => ByteWidth::W5.uint_max(), store_be::<5>
    }

    impl_fixed_write! {
        /// Writes an unsigned little-endian 48-bit integer.
        write_uint48_le, 6, 0 => ByteWidth::W6.uint_max(), store_le::<6>
    }

    impl_fixed_write! {
        /// Writes an unsigned big-endian 48-bit integer.
        write_uint48_be, 6, 0 => ByteWidth::W6.uint_max(), store_be::<6>
    }

    impl_fixed_write! {
        /// Writes a signed 8-bit integer.
        write_int8, 1, ByteWidth::W1.int_min() => ByteWidth::W1.int_max(), store_le::<1>
    }

    impl_fixed_write! {
        /// Writes a signed little-endian 16-bit integer.
        write_int16_le, 2, ByteWidth::W2.int_min() => ByteWidth::W2.int_max(), store_le::<2>
    }

    impl_fixed_write! {
        /// Writes a signed big-endian 16-bit integer.
        write_int16_be, 2, ByteWidth::W2.int_min() => ByteWidth::W2.int_max(), store_be::<2>
    }

    impl_fixed_write! {
        /// Writes a signed little-endian 24-bit integer.
        write_int24_le, 3, ByteWidth::W3.int_min() => ByteWidth::W3.int_max(), store_le::<3>
    }

    impl_fixed_write! {
        /// Writes a signed big-endian 24-bit integer.
        write_int24_be, 3, ByteWidth::W3.int_min() => ByteWidth::W3.int_max(), store_be::<3>
    }

    impl_fixed_write! {
        /// Writes a signed little-endian 32-bit integer.
        write_int32_le, 4, ByteWidth::W4.int_min() => ByteWidth::W4.int_max(), store_le::<4>
    }

    impl_fixed_write! {
        /// Writes a signed big-endian 32-bit integer.
        write_int32_be, 4, ByteWidth::W4.int_min() => ByteWidth::W4.int_max(), store_be::<4>
    }

    impl_fixed_write! {
        /// Writes a signed little-endian 40-bit integer.
        write_int40_le, 5, ByteWidth::W5.int_min() => ByteWidth::W5.int_max(), store_le::<5>
    }

    impl_fixed_write! {
        /// Writes a signed big-endian 40-bit integer.
        write_int40_be, 5, ByteWidth::W5.int_min() => ByteWidth::W5.int_max(), store_be::<5>
    }

    impl_fixed_write! {
        /// Writes a signed little-endian 48-bit integer.
        write_int48_le, 6, ByteWidth::W6.int_min() => ByteWidth::W6.int_max(), store_le::<6>
    }

    impl_fixed_write! {
        /// Writes a signed big-endian 48-bit integer.
        write_int48_be, 6, ByteWidth::W6.int_min() => ByteWidth::W6.int_max(), store_be::<6>
    }
}
