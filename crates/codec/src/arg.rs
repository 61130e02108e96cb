//! Explicit numeric conversion for arguments crossing the API boundary.
//!
//! Offsets, values and byte lengths are accepted as anything implementing
//! [`NumArg`].  Conversion never coerces silently: a missing argument (`None`)
//! is reported as a type error by the caller, and integer-ness and range are
//! checked afterwards against the [`Num`] this produces.

use std::fmt;

/// A number as received at the API boundary, before validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Num {
    /// An exact integer.  Wide enough to hold every primitive integer type.
    Int(i128),

    /// A floating point number, which may be fractional or non-finite.
    Float(f64),
}

impl Num {
    /// Returns the value as an `f64`, rounding large integers to nearest.
    pub fn as_f64(self) -> f64 {
        match self {
            Num::Int(v) => v as f64,
            Num::Float(v) => v,
        }
    }

    /// Returns the value as an exact integer if it has no fractional part.
    ///
    /// Infinities saturate to the `i128` bounds so that they fail whatever
    /// range check follows.  NaN is not an integer.
    pub fn as_integer(self) -> Option<i128> {
        match self {
            Num::Int(v) => Some(v),
            Num::Float(v) if v.is_nan() => None,
            Num::Float(v) if v.is_finite() && v.trunc() != v => None,
            Num::Float(v) => Some(v as i128),
        }
    }

    /// Returns if this is a NaN float.
    pub fn is_nan(self) -> bool {
        matches!(self, Num::Float(v) if v.is_nan())
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(v) => write!(f, "{v}"),
            Num::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Types that can be passed where the codec expects a number.
pub trait NumArg {
    /// Converts into a [`Num`], or `None` if there is no number to convert.
    fn into_num(self) -> Option<Num>;
}

impl NumArg for Num {
    fn into_num(self) -> Option<Num> {
        Some(self)
    }
}

impl<T: NumArg> NumArg for Option<T> {
    fn into_num(self) -> Option<Num> {
        self.and_then(NumArg::into_num)
    }
}

/// Simple macro to wrap the primitive number types, not much to see.
macro_rules! impl_num_arg {
    ( $variant:ident as $inner:ty : $( $ty:ty ),* ) => {
        $(
            impl NumArg for $ty {
                fn into_num(self) -> Option<Num> {
                    Some(Num::$variant(self as $inner))
                }
            }
        )*
    };
}

impl_num_arg!(Int as i128: u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
impl_num_arg!(Float as f64: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_num() {
        assert_eq!(5u8.into_num(), Some(Num::Int(5)));
        assert_eq!((-5i64).into_num(), Some(Num::Int(-5)));
        assert_eq!(u64::MAX.into_num(), Some(Num::Int(u64::MAX as i128)));
        assert_eq!(1.5f64.into_num(), Some(Num::Float(1.5)));
        assert_eq!(Some(3usize).into_num(), Some(Num::Int(3)));
        assert_eq!(None::<usize>.into_num(), None);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Num::Int(-7).as_integer(), Some(-7));
        assert_eq!(Num::Float(4.0).as_integer(), Some(4));
        assert_eq!(Num::Float(-0.0).as_integer(), Some(0));
        assert_eq!(Num::Float(4.25).as_integer(), None);
        assert_eq!(Num::Float(f64::NAN).as_integer(), None);
        assert_eq!(Num::Float(f64::INFINITY).as_integer(), Some(i128::MAX));
        assert_eq!(Num::Float(f64::NEG_INFINITY).as_integer(), Some(i128::MIN));
    }

    #[test]
    fn test_display() {
        assert_eq!(Num::Int(-12).to_string(), "-12");
        assert_eq!(Num::Float(1.5).to_string(), "1.5");
        assert_eq!(Num::Float(3.0).to_string(), "3");
    }
}
