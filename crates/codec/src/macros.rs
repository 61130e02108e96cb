//! Simple macros for the fixed-width accessor methods.

/// Generates a bounds-checked fixed-width read method on a buffer.
///
/// The body is evaluated with `$this` bound to the buffer and `$at` to the
/// validated offset.  A missing offset reads from the start of the buffer.
macro_rules! impl_fixed_read {
    (
        $( #[ $attr:meta ] )*
        $name:ident -> $ty:ty, $width:literal, |$this:ident, $at:ident| $body:expr
    ) => {
        $( #[ $attr ] )*
        pub fn $name(&self, offset: impl $crate::NumArg) -> $crate::CodecResult<$ty> {
            let $at = $crate::bounds::check_offset_or_zero(offset, self.len(), $width)?;
            let $this = self;
            Ok($body)
        }
    };
}

/// Generates a range- and bounds-checked fixed-width write method on a buffer.
///
/// The value is validated against `[$min, $max]` before the offset, and
/// nothing is written unless both pass.  Returns the offset just past the
/// written bytes.
macro_rules! impl_fixed_write {
    (
        $( #[ $attr:meta ] )*
        $name:ident, $width:literal, $min:expr => $max:expr, $store:expr
    ) => {
        $( #[ $attr ] )*
        pub fn $name(
            &mut self,
            value: impl $crate::NumArg,
            offset: impl $crate::NumArg,
        ) -> $crate::CodecResult<usize> {
            let value = $crate::bounds::check_int(value, $min, $max)?;
            let at = $crate::bounds::check_offset_or_zero(offset, self.len(), $width)?;
            ($store)(self.as_bytes_mut(), at, value as u64);
            Ok(at + $width)
        }
    };
}
