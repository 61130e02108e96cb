//! Bounds-checked fixed-width binary codec over a contiguous byte buffer.
//!
//! [`FastBuffer`] wraps any `AsRef<[u8]>` storage and provides reads and
//! writes of unsigned and signed integers 8 to 48 bits wide and of 32/64-bit
//! floats, in both byte orders.  Offsets, values and byte lengths are taken as
//! [`NumArg`]s and validated explicitly, failing with a [`CodecError`] whose
//! [`ErrorKind`] tells type, range and bounds violations apart.  A failed write
//! never touches the buffer.
//!
//! ```rust
//! use fastbuf_codec::FastBuffer;
//!
//! let mut buf = FastBuffer::zeroed(6);
//! let next = buf.write_uint48_le(0xffff_ffff_ffffu64, 0).unwrap();
//! assert_eq!(next, 6);
//! assert_eq!(buf.read_int48_le(0).unwrap(), -1);
//! ```

#[macro_use]
mod macros;

mod arg;
pub use arg::{Num, NumArg};

mod bounds;

mod buffer;
pub use buffer::FastBuffer;

mod dispatch;

mod errors;
pub use errors::{CodecError, CodecResult, ErrorKind};

mod float_codec;

mod format;
pub use format::{IntFormat, InvalidIntFormat};

mod int_codec;

mod types;
pub use types::{ByteWidth, Endian, MAX_INT_WIDTH, Signedness};

mod util;
pub use util::{encode_to_vec, read_seq, write_seq};

mod view;
pub use view::RawView;

#[cfg(feature = "arbitrary")]
mod arbitrary;

#[cfg(feature = "serde")]
mod serde;
