//! Property testing macros and utilities for fastbuf-codec.
//!
//! The main export is the `generate_width_tests!` macro, which generates a
//! suite of property tests for one fixed-width accessor family.
#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::ops::RangeInclusive;

use fastbuf_codec::IntFormat;

// Re-export dependencies for macro usage
pub use fastbuf_codec;
pub use paste;
pub use proptest;

/// Parses a compact format string, panicking on bad input.
pub fn format(s: &str) -> IntFormat {
    s.parse()
        .unwrap_or_else(|e| panic!("test: bad format string {s:?}: {e}"))
}

/// Returns the inclusive range of values representable in a format.
pub fn value_range(s: &str) -> RangeInclusive<i64> {
    let fmt = format(s);
    fmt.min()..=fmt.max()
}

/// Generates property tests for a family of fixed-width accessors.
///
/// The first argument is the method stem (`uint24` selects `read_uint24_le`,
/// `write_uint24_be` and so on), the second the type the reads return, the
/// third the compact format string without a byte order.  Single-byte
/// families, which have no byte order, are selected with a trailing `single`.
///
/// The generated tests verify that:
/// 1. Writing then reading at any offset gives back the original value
/// 2. Writes return the offset just past the written bytes
/// 3. Little-endian bytes reversed equal the big-endian bytes
/// 4. The last in-bounds offset works and the next one fails with no write
/// 5. The fixed-width accessors agree with the dispatching ones
///
/// # Example
/// ```rust,no_run
/// use fastbuf_codec_tests::generate_width_tests;
///
/// generate_width_tests!(uint24, u32, "u24");
/// generate_width_tests!(int8, i8, "i8", single);
/// ```
#[macro_export]
macro_rules! generate_width_tests {
    ($name:ident, $ty:ty, $fmt:literal) => {
        $crate::paste::paste! {
            mod [<proptest_ $name>] {
                use $crate::fastbuf_codec::{ErrorKind, FastBuffer};
                use $crate::proptest::prelude::*;

                const LE: &str = concat!($fmt, "le");
                const BE: &str = concat!($fmt, "be");

                fn width() -> usize {
                    $crate::format(LE).byte_len()
                }

                $crate::proptest::proptest! {
                    #[test]
                    fn test_roundtrip_le(value in $crate::value_range(LE), pad in 0usize..4) {
                        let mut buf = FastBuffer::zeroed(width() + pad);
                        let end = buf.[<write_ $name _le>](value, pad).expect("test: write should succeed");
                        prop_assert_eq!(end, pad + width());
                        let got: $ty = buf.[<read_ $name _le>](pad).expect("test: read should succeed");
                        prop_assert_eq!(got as i64, value);
                    }

                    #[test]
                    fn test_roundtrip_be(value in $crate::value_range(BE), pad in 0usize..4) {
                        let mut buf = FastBuffer::zeroed(width() + pad);
                        let end = buf.[<write_ $name _be>](value, pad).expect("test: write should succeed");
                        prop_assert_eq!(end, pad + width());
                        let got: $ty = buf.[<read_ $name _be>](pad).expect("test: read should succeed");
                        prop_assert_eq!(got as i64, value);
                    }

                    #[test]
                    fn test_endian_mirror(value in $crate::value_range(LE)) {
                        let mut le = FastBuffer::zeroed(width());
                        let mut be = FastBuffer::zeroed(width());
                        le.[<write_ $name _le>](value, 0).expect("test: write should succeed");
                        be.[<write_ $name _be>](value, 0).expect("test: write should succeed");

                        let mut reversed = le.as_bytes().to_vec();
                        reversed.reverse();
                        prop_assert_eq!(reversed.as_slice(), be.as_bytes());
                    }

                    #[test]
                    fn test_upper_edge(extra in 0usize..8) {
                        let len = width() + extra;
                        let mut buf = FastBuffer::new(vec![0xa5u8; len]);
                        prop_assert!(buf.[<read_ $name _le>](len - width()).is_ok());
                        prop_assert!(buf.[<read_ $name _be>](len - width()).is_ok());

                        let past = len - width() + 1;
                        let e = buf.[<read_ $name _le>](past).unwrap_err();
                        prop_assert_eq!(e.kind(), ErrorKind::OutOfBounds);
                        let e = buf.[<write_ $name _be>](0, past).unwrap_err();
                        prop_assert_eq!(e.kind(), ErrorKind::OutOfBounds);
                        prop_assert!(buf.as_bytes().iter().all(|&b| b == 0xa5));
                    }

                    #[test]
                    fn test_matches_dispatch(value in $crate::value_range(BE)) {
                        let le = $crate::format(LE);
                        let be = $crate::format(BE);
                        let mut buf = FastBuffer::zeroed(width());

                        buf.[<write_ $name _le>](value, 0).expect("test: write should succeed");
                        prop_assert_eq!(le.read(&buf, 0).expect("test: read should succeed"), value);

                        be.write(&mut buf, value, 0).expect("test: write should succeed");
                        let got: $ty = buf.[<read_ $name _be>](0).expect("test: read should succeed");
                        prop_assert_eq!(got as i64, value);
                    }
                }
            }
        }
    };

    ($name:ident, $ty:ty, $fmt:literal, single) => {
        $crate::paste::paste! {
            mod [<proptest_ $name>] {
                use $crate::fastbuf_codec::{ErrorKind, FastBuffer};
                use $crate::proptest::prelude::*;

                $crate::proptest::proptest! {
                    #[test]
                    fn test_roundtrip(value in $crate::value_range($fmt), pad in 0usize..4) {
                        let mut buf = FastBuffer::zeroed(1 + pad);
                        let end = buf.[<write_ $name>](value, pad).expect("test: write should succeed");
                        prop_assert_eq!(end, pad + 1);
                        let got: $ty = buf.[<read_ $name>](pad).expect("test: read should succeed");
                        prop_assert_eq!(got as i64, value);
                    }

                    #[test]
                    fn test_upper_edge(len in 1usize..9) {
                        let mut buf = FastBuffer::new(vec![0xa5u8; len]);
                        prop_assert!(buf.[<read_ $name>](len - 1).is_ok());

                        let e = buf.[<read_ $name>](len).unwrap_err();
                        prop_assert_eq!(e.kind(), ErrorKind::OutOfBounds);
                        let e = buf.[<write_ $name>](0, len).unwrap_err();
                        prop_assert_eq!(e.kind(), ErrorKind::OutOfBounds);
                        prop_assert!(buf.as_bytes().iter().all(|&b| b == 0xa5));
                    }

                    #[test]
                    fn test_matches_dispatch(value in $crate::value_range($fmt)) {
                        let fmt = $crate::format($fmt);
                        let mut buf = FastBuffer::zeroed(1);
                        buf.[<write_ $name>](value, 0).expect("test: write should succeed");
                        prop_assert_eq!(fmt.read(&buf, 0).expect("test: read should succeed"), value);
                    }
                }
            }
        }
    };
}
