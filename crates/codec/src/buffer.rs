//! The buffer type the codec operates on.

use crate::errors::{CodecError, CodecResult};
use crate::view::{RawView, ViewCache};

/// Fixed-length byte buffer over an arbitrary [`AsRef`] on a byte slice.
///
/// The buffer exposes a window (by default all) of its backing storage and
/// never allocates or resizes it, except for the explicit
/// [`FastBuffer::resize`] on owned vecs.  Native-width accesses go through a
/// [`RawView`] that is built the first time one is needed and then reused.
#[derive(Clone, Debug)]
pub struct FastBuffer<B> {
    storage: B,
    byte_offset: usize,
    byte_len: usize,
    view: ViewCache,
}

impl<B: AsRef<[u8]>> FastBuffer<B> {
    /// Constructs a new instance exposing all of the storage.
    pub fn new(storage: B) -> Self {
        let byte_len = storage.as_ref().len();
        Self {
            storage,
            byte_offset: 0,
            byte_len,
            view: ViewCache::default(),
        }
    }

    /// Constructs a new instance exposing `byte_len` bytes of the storage
    /// starting at `byte_offset`.
    pub fn with_window(storage: B, byte_offset: usize, byte_len: usize) -> CodecResult<Self> {
        let storage_len = storage.as_ref().len();
        let fits = byte_offset
            .checked_add(byte_len)
            .is_some_and(|end| end <= storage_len);
        if !fits {
            return Err(CodecError::WindowOutOfBounds {
                byte_offset,
                byte_len,
                storage_len,
            });
        }

        Ok(Self {
            storage,
            byte_offset,
            byte_len,
            view: ViewCache::default(),
        })
    }

    /// Returns the length of the window.
    pub fn len(&self) -> usize {
        self.byte_len
    }

    /// Returns if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.byte_len == 0
    }

    /// Returns where the window starts in the backing storage.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the bytes in the window.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.as_ref()[self.byte_offset..self.byte_offset + self.byte_len]
    }

    /// Returns if the raw view has been constructed yet.
    pub fn is_view_cached(&self) -> bool {
        self.view.is_initialized()
    }

    /// Unwraps the backing storage.
    pub fn into_inner(self) -> B {
        self.storage
    }

    /// Returns the backing storage, including bytes outside the window.
    pub(crate) fn storage(&self) -> &[u8] {
        self.storage.as_ref()
    }

    /// Returns the raw view for this buffer, building it on first use and
    /// handing back the same one on every later call.
    pub fn view(&self) -> &RawView {
        self.view.get_or_init(self.byte_offset, self.byte_len)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FastBuffer<B> {
    /// Returns the bytes in the window, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let range = self.byte_offset..self.byte_offset + self.byte_len;
        &mut self.storage.as_mut()[range]
    }

    /// Returns the raw view together with mutable storage.
    pub(crate) fn view_mut(&mut self) -> (RawView, &mut [u8]) {
        let view = *self.view();
        (view, self.storage.as_mut())
    }
}

impl FastBuffer<Vec<u8>> {
    /// Constructs a zero-filled owned buffer.
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0; len])
    }

    /// Resizes the window of an owned buffer, zero-filling any new bytes.
    ///
    /// Bytes before the window are kept, bytes after it are discarded.  The
    /// cached raw view is dropped, since it is bound to the old length.
    pub fn resize(&mut self, new_len: usize) {
        self.storage.truncate(self.byte_offset + self.byte_len);
        self.storage.resize(self.byte_offset + new_len, 0);
        self.byte_len = new_len;
        self.view.invalidate();
    }
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for FastBuffer<B> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for FastBuffer<Vec<u8>> {
    fn from(storage: Vec<u8>) -> Self {
        Self::new(storage)
    }
}
