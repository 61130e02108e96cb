use thiserror::Error;

use crate::arg::Num;

/// Errors from fastbuf-codec.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CodecError {
    /// A required argument was missing or not number-like.
    #[error("the \"{name}\" argument must be of type number, received {received}")]
    InvalidArgType {
        /// Name of the offending argument.
        name: &'static str,
        /// Description of what we got instead.
        received: &'static str,
    },

    /// A numeric argument was outside its admissible bound.
    #[error("the value of \"{name}\" is out of range, it must be {range}, received {received}")]
    OutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// The inclusive bound that was violated.
        range: String,
        /// The value we got.
        received: Num,
    },

    /// The offset was an integer, but the span it implies does not fit in the
    /// buffer.
    #[error(
        "the value of \"offset\" is out of range, it must be >= 0 and <= {max}, received {received}"
    )]
    OffsetOutOfBounds {
        /// Largest offset at which the access would have fit.
        max: usize,
        /// The offset we got.
        received: Num,
    },

    /// The buffer is shorter than the width of the access, so no offset can
    /// satisfy it.
    #[error("attempt to access memory outside buffer bounds")]
    BufferOutOfBounds,

    /// The requested byte length is not one of the supported integer widths.
    #[error("the value of \"byteLength\" is out of range, it must be >= 1 and <= 6, received {0}")]
    UnsupportedByteLength(Num),

    /// A buffer window did not fit inside its backing storage.
    #[error("window {byte_offset}+{byte_len} exceeds storage of {storage_len} bytes")]
    WindowOutOfBounds {
        /// Start of the requested window.
        byte_offset: usize,
        /// Length of the requested window.
        byte_len: usize,
        /// Length of the backing storage.
        storage_len: usize,
    },
}

impl CodecError {
    /// Classifies the error into one of the three failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidArgType { .. } => ErrorKind::InvalidType,
            CodecError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CodecError::OffsetOutOfBounds { .. }
            | CodecError::BufferOutOfBounds
            | CodecError::UnsupportedByteLength(_)
            | CodecError::WindowOutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }
}

/// Broad classification of a [`CodecError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An argument was missing or of the wrong type.
    InvalidType,

    /// A value violated its numeric domain.
    OutOfRange,

    /// An access would have reached outside the underlying storage, or used an
    /// unsupported width.
    OutOfBounds,
}

/// Wrapper result type.
pub type CodecResult<T> = Result<T, CodecError>;
