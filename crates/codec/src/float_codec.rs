//! IEEE-754 reads and writes, all through the raw view.
//!
//! Float writes only check for a missing value.  Narrowing an `f64` into a
//! 32-bit slot rounds to nearest, and out of range magnitudes become infinite.

use crate::arg::NumArg;
use crate::bounds::{check_float, check_offset_or_zero};
use crate::buffer::FastBuffer;
use crate::errors::CodecResult;
use crate::types::Endian;

impl<B: AsRef<[u8]>> FastBuffer<B> {
    fn read_f32(&self, offset: impl NumArg, endian: Endian) -> CodecResult<f32> {
        let at = check_offset_or_zero(offset, self.len(), 4)?;
        Ok(self.view().get_float32(self.storage(), at, endian))
    }

    fn read_f64(&self, offset: impl NumArg, endian: Endian) -> CodecResult<f64> {
        let at = check_offset_or_zero(offset, self.len(), 8)?;
        Ok(self.view().get_float64(self.storage(), at, endian))
    }

    /// Reads a little-endian 32-bit float.
    pub fn read_float_le(&self, offset: impl NumArg) -> CodecResult<f32> {
        self.read_f32(offset, Endian::Little)
    }

    /// Reads a big-endian 32-bit float.
    pub fn read_float_be(&self, offset: impl NumArg) -> CodecResult<f32> {
        self.read_f32(offset, Endian::Big)
    }

    /// Reads a little-endian 64-bit float.
    pub fn read_double_le(&self, offset: impl NumArg) -> CodecResult<f64> {
        self.read_f64(offset, Endian::Little)
    }

    /// Reads a big-endian 64-bit float.
    pub fn read_double_be(&self, offset: impl NumArg) -> CodecResult<f64> {
        self.read_f64(offset, Endian::Big)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FastBuffer<B> {
    fn write_f32(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
        endian: Endian,
    ) -> CodecResult<usize> {
        let value = check_float(value)?;
        let at = check_offset_or_zero(offset, self.len(), 4)?;
        let (view, storage) = self.view_mut();
        view.set_float32(storage, at, value as f32, endian);
        Ok(at + 4)
    }

    fn write_f64(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
        endian: Endian,
    ) -> CodecResult<usize> {
        let value = check_float(value)?;
        let at = check_offset_or_zero(offset, self.len(), 8)?;
        let (view, storage) = self.view_mut();
        view.set_float64(storage, at, value, endian);
        Ok(at + 8)
    }

    /// Writes a little-endian 32-bit float, returning the offset past it.
    pub fn write_float_le(&mut self, value: impl NumArg, offset: impl NumArg) -> CodecResult<usize> {
        self.write_f32(value, offset, Endian::Little)
    }

    /// Writes a big-endian 32-bit float, returning the offset past it.
    pub fn write_float_be(&mut self, value: impl NumArg, offset: impl NumArg) -> CodecResult<usize> {
        self.write_f32(value, offset, Endian::Big)
    }

    /// Writes a little-endian 64-bit float, returning the offset past it.
    pub fn write_double_le(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
    ) -> CodecResult<usize> {
        self.write_f64(value, offset, Endian::Little)
    }

    /// Writes a big-endian 64-bit float, returning the offset past it.
    pub fn write_double_be(
        &mut self,
        value: impl NumArg,
        offset: impl NumArg,
    ) -> CodecResult<usize> {
        self.write_f64(value, offset, Endian::Big)
    }
}
