//! Offset and value validation shared by every read and write.

use crate::arg::{Num, NumArg};
use crate::errors::{CodecError, CodecResult};

/// Validates that a `width`-byte access at `offset` lies inside a sequence of
/// `len` bytes, returning the offset as an index.
///
/// A missing offset is a type error.
pub(crate) fn check_offset(offset: impl NumArg, len: usize, width: usize) -> CodecResult<usize> {
    let num = offset.into_num().ok_or(CodecError::InvalidArgType {
        name: "offset",
        received: "None",
    })?;
    check_bounds(num, len, width)
}

/// Same as [`check_offset`], but a missing offset means the start of the
/// sequence.
pub(crate) fn check_offset_or_zero(
    offset: impl NumArg,
    len: usize,
    width: usize,
) -> CodecResult<usize> {
    check_bounds(offset.into_num().unwrap_or(Num::Int(0)), len, width)
}

fn check_bounds(offset: Num, len: usize, width: usize) -> CodecResult<usize> {
    let Some(at) = offset.as_integer() else {
        return Err(CodecError::OutOfRange {
            name: "offset",
            range: "an integer".to_owned(),
            received: offset,
        });
    };

    // Both the first and the last byte of the span have to exist.
    match usize::try_from(at) {
        Ok(at) if at.checked_add(width).is_some_and(|end| end <= len) => Ok(at),
        _ => Err(bounds_error(offset, len, width)),
    }
}

/// Builds the error for an integral offset whose span does not fit.
fn bounds_error(offset: Num, len: usize, width: usize) -> CodecError {
    match len.checked_sub(width) {
        Some(max) => CodecError::OffsetOutOfBounds {
            max,
            received: offset,
        },
        None => CodecError::BufferOutOfBounds,
    }
}

/// Validates an integer value against the inclusive range `[min, max]`,
/// returning it truncated towards zero.
pub(crate) fn check_int(value: impl NumArg, min: i64, max: i64) -> CodecResult<i64> {
    let num = value
        .into_num()
        .filter(|v| !v.is_nan())
        .ok_or(CodecError::InvalidArgType {
            name: "value",
            received: "None or NaN",
        })?;

    let in_range = match num {
        Num::Int(v) => (i128::from(min)..=i128::from(max)).contains(&v),
        Num::Float(v) => v >= min as f64 && v <= max as f64,
    };
    if !in_range {
        return Err(CodecError::OutOfRange {
            name: "value",
            range: format!(">= {min} and <= {max}"),
            received: num,
        });
    }

    Ok(match num {
        Num::Int(v) => v as i64,
        Num::Float(v) => v.trunc() as i64,
    })
}

/// Converts a float argument, rejecting only missing input.
pub(crate) fn check_float(value: impl NumArg) -> CodecResult<f64> {
    value
        .into_num()
        .map(Num::as_f64)
        .ok_or(CodecError::InvalidArgType {
            name: "value",
            received: "None",
        })
}
