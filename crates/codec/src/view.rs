//! Lazily constructed raw accessor for native-width values.
//!
//! A [`RawView`] is bound to the window of backing storage a buffer exposes.
//! Each buffer owns one [`ViewCache`], which builds the view on first use and
//! hands the same view back afterwards until the buffer is resized.

use std::cell::OnceCell;

use tracing::{debug, trace};

use crate::types::Endian;

/// Accessor for 16/32-bit integers and 32/64-bit floats over a window of
/// backing storage.
///
/// All positions passed to the accessor methods are relative to the window and
/// must already have been bounds checked against [`RawView::byte_len`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawView {
    byte_offset: usize,
    byte_len: usize,
}

impl RawView {
    fn new(byte_offset: usize, byte_len: usize) -> Self {
        Self {
            byte_offset,
            byte_len,
        }
    }

    /// Start of the window within the backing storage.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Length of the window.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    fn load<const N: usize>(&self, storage: &[u8], at: usize) -> [u8; N] {
        debug_assert!(at + N <= self.byte_len, "view: load past window");
        let start = self.byte_offset + at;
        let mut buf = [0; N];
        buf.copy_from_slice(&storage[start..start + N]);
        buf
    }

    fn store<const N: usize>(&self, storage: &mut [u8], at: usize, bytes: [u8; N]) {
        debug_assert!(at + N <= self.byte_len, "view: store past window");
        let start = self.byte_offset + at;
        storage[start..start + N].copy_from_slice(&bytes);
    }

    pub(crate) fn get_uint16(&self, storage: &[u8], at: usize, endian: Endian) -> u16 {
        let arr = self.load(storage, at);
        match endian {
            Endian::Little => u16::from_le_bytes(arr),
            Endian::Big => u16::from_be_bytes(arr),
        }
    }

    pub(crate) fn get_int16(&self, storage: &[u8], at: usize, endian: Endian) -> i16 {
        let arr = self.load(storage, at);
        match endian {
            Endian::Little => i16::from_le_bytes(arr),
            Endian::Big => i16::from_be_bytes(arr),
        }
    }

    pub(crate) fn get_uint32(&self, storage: &[u8], at: usize, endian: Endian) -> u32 {
        let arr = self.load(storage, at);
        match endian {
            Endian::Little => u32::from_le_bytes(arr),
            Endian::Big => u32::from_be_bytes(arr),
        }
    }

    pub(crate) fn get_int32(&self, storage: &[u8], at: usize, endian: Endian) -> i32 {
        let arr = self.load(storage, at);
        match endian {
            Endian::Little => i32::from_le_bytes(arr),
            Endian::Big => i32::from_be_bytes(arr),
        }
    }

    pub(crate) fn get_float32(&self, storage: &[u8], at: usize, endian: Endian) -> f32 {
        let arr = self.load(storage, at);
        match endian {
            Endian::Little => f32::from_le_bytes(arr),
            Endian::Big => f32::from_be_bytes(arr),
        }
    }

    pub(crate) fn get_float64(&self, storage: &[u8], at: usize, endian: Endian) -> f64 {
        let arr = self.load(storage, at);
        match endian {
            Endian::Little => f64::from_le_bytes(arr),
            Endian::Big => f64::from_be_bytes(arr),
        }
    }

    pub(crate) fn set_float32(&self, storage: &mut [u8], at: usize, v: f32, endian: Endian) {
        let arr = match endian {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        };
        self.store(storage, at, arr);
    }

    pub(crate) fn set_float64(&self, storage: &mut [u8], at: usize, v: f64, endian: Endian) {
        let arr = match endian {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        };
        self.store(storage, at, arr);
    }
}

/// Per-buffer memo slot for a [`RawView`].
///
/// Cloning yields an empty cache, so a view is never carried over to another
/// buffer.
#[derive(Debug, Default)]
pub(crate) struct ViewCache(OnceCell<RawView>);

impl ViewCache {
    /// Returns the cached view, constructing it for the given window the first
    /// time around.
    pub(crate) fn get_or_init(&self, byte_offset: usize, byte_len: usize) -> &RawView {
        self.0.get_or_init(|| {
            trace!(%byte_offset, %byte_len, "constructing raw view");
            RawView::new(byte_offset, byte_len)
        })
    }

    /// Drops the cached view, if any.  Must be called whenever the window the
    /// view was bound to changes.
    pub(crate) fn invalidate(&mut self) {
        if let Some(view) = self.0.take() {
            debug!(byte_len = %view.byte_len, "invalidated raw view");
        }
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.0.get().is_some()
    }
}

impl Clone for ViewCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memoized() {
        let cache = ViewCache::default();
        assert!(!cache.is_initialized());

        let a = cache.get_or_init(2, 8) as *const RawView;
        // Later calls ignore the arguments and hand back the same view.
        let b = cache.get_or_init(0, 0) as *const RawView;
        assert_eq!(a, b);
        assert!(cache.is_initialized());
        assert_eq!(cache.get_or_init(0, 0).byte_len(), 8);
    }

    #[test]
    fn test_invalidate() {
        let mut cache = ViewCache::default();
        cache.get_or_init(0, 4);
        cache.invalidate();
        assert!(!cache.is_initialized());
        assert_eq!(cache.get_or_init(0, 16).byte_len(), 16);
    }

    #[test]
    fn test_clone_is_empty() {
        let cache = ViewCache::default();
        cache.get_or_init(0, 4);
        assert!(!cache.clone().is_initialized());
    }

    #[test]
    fn test_window_offset() {
        let storage = [0xaa, 0x01, 0x02, 0x03, 0x04];
        let cache = ViewCache::default();
        let view = cache.get_or_init(1, 4);
        assert_eq!(view.get_uint16(&storage, 0, Endian::Little), 0x0201);
        assert_eq!(view.get_uint16(&storage, 0, Endian::Big), 0x0102);
        assert_eq!(view.get_uint32(&storage, 0, Endian::Big), 0x0102_0304);
        assert_eq!(view.get_int16(&storage, 2, Endian::Little), 0x0403);
    }

    #[test]
    fn test_float_accessors() {
        let mut storage = [0u8; 12];
        let view = RawView::new(4, 8);
        view.set_float64(&mut storage, 0, 1.5, Endian::Big);
        assert_eq!(&storage[..4], &[0; 4]);
        assert_eq!(view.get_float64(&storage, 0, Endian::Big), 1.5);

        view.set_float32(&mut storage, 4, -2.0, Endian::Little);
        assert_eq!(view.get_float32(&storage, 4, Endian::Little), -2.0);
        assert_eq!(view.get_int32(&storage, 4, Endian::Little), (-2.0f32).to_bits() as i32);
    }
}
