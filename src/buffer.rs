//! Pixel buffer contract and the interleaved reference implementation.
//!
//! The statistical core only ever reads pixels through [`PixelBuffer`]:
//! dimensions, bit depth, and constant-time random-access sampling by
//! `(x, y, channel)`. Stride and offset bookkeeping stays inside the
//! concrete buffer type and is never visible to the statistics or combiner
//! logic.
//!
//! Decoders produce buffers; the core never mutates them.

use num_traits::ToPrimitive;

use crate::SsimError;

/// Read-only access to a rectangular grid of per-channel samples.
///
/// Implement this trait to feed custom decoder output into the comparison
/// pipeline without copying into [`InterleavedBuffer`].
pub trait PixelBuffer {
    /// Buffer width in pixels.
    fn width(&self) -> usize;

    /// Buffer height in pixels.
    fn height(&self) -> usize;

    /// Number of channels per pixel.
    fn channels(&self) -> usize;

    /// Declared bit depth of the samples.
    ///
    /// `0` means the source format carries no explicit depth field (e.g.
    /// JPEG) and the buffer should be treated as 8-bit.
    fn bit_depth(&self) -> u32;

    /// Returns the sample at `(x, y, channel)`.
    ///
    /// # Errors
    /// [`SsimError::OutOfBounds`] if any coordinate falls outside
    /// `[0, width) x [0, height) x [0, channels)`.
    fn sample(&self, x: usize, y: usize, channel: usize) -> Result<f64, SsimError>;

    /// Maximum representable sample value, derived from the bit depth.
    ///
    /// Used to scale the SSIM stabilizing constants. A bit depth of `0`
    /// resolves to 8-bit, so the default dynamic range is 255.
    fn dynamic_range(&self) -> f64 {
        let depth = match self.bit_depth() {
            0 => 8,
            d => d,
        };
        (2f64).powi(depth as i32) - 1.0
    }
}

/// Row-major interleaved pixel storage.
///
/// Samples are laid out `[p0c0, p0c1, .., p1c0, ..]` with rows contiguous.
/// Generic over the stored sample type; integer samples convert losslessly
/// to `f64` at the sampling boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct InterleavedBuffer<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
    channels: usize,
    bit_depth: u32,
}

impl<T: ToPrimitive + Copy> InterleavedBuffer<T> {
    /// Creates a buffer over interleaved sample data.
    ///
    /// # Errors
    /// [`SsimError::InvalidBufferLength`] if `data.len()` does not equal
    /// `width * height * channels`.
    pub fn new(
        data: Vec<T>,
        width: usize,
        height: usize,
        channels: usize,
        bit_depth: u32,
    ) -> Result<Self, SsimError> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(SsimError::InvalidBufferLength {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            bit_depth,
        })
    }

    /// Returns the raw interleaved samples.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: ToPrimitive + Copy> PixelBuffer for InterleavedBuffer<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channels(&self) -> usize {
        self.channels
    }

    fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    fn sample(&self, x: usize, y: usize, channel: usize) -> Result<f64, SsimError> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return Err(SsimError::OutOfBounds {
                x,
                y,
                channel,
                width: self.width,
                height: self.height,
                channels: self.channels,
            });
        }
        let idx = (y * self.width + x) * self.channels + channel;
        // Index is in range by the checks above plus the constructor's
        // length validation. to_f64 is total for every sample type we
        // accept (u8/u16/f32/f64).
        Ok(self.data[idx].to_f64().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_3x3() -> InterleavedBuffer<u8> {
        InterleavedBuffer::new(vec![128u8; 3 * 3 * 3], 3, 3, 3, 8).unwrap()
    }

    #[test]
    fn test_constructor_rejects_wrong_length() {
        let result = InterleavedBuffer::new(vec![0u8; 10], 3, 3, 3, 8);
        assert_eq!(
            result.unwrap_err(),
            SsimError::InvalidBufferLength {
                width: 3,
                height: 3,
                channels: 3,
                expected: 27,
                actual: 10,
            }
        );
    }

    #[test]
    fn test_sample_addresses_interleaved_layout() {
        // 2x2 RGB with distinct values per sample
        let data: Vec<u8> = (0..12).collect();
        let buf = InterleavedBuffer::new(data, 2, 2, 3, 8).unwrap();

        // pixel (1, 0) starts at offset 3
        assert_eq!(buf.sample(1, 0, 0).unwrap(), 3.0);
        assert_eq!(buf.sample(1, 0, 2).unwrap(), 5.0);
        // pixel (0, 1) starts at offset 6 (second row)
        assert_eq!(buf.sample(0, 1, 1).unwrap(), 7.0);
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let buf = gray_3x3();
        assert!(matches!(
            buf.sample(3, 0, 0),
            Err(SsimError::OutOfBounds { x: 3, .. })
        ));
        assert!(matches!(
            buf.sample(0, 3, 0),
            Err(SsimError::OutOfBounds { y: 3, .. })
        ));
        assert!(matches!(
            buf.sample(0, 0, 3),
            Err(SsimError::OutOfBounds { channel: 3, .. })
        ));
    }

    #[test]
    fn test_dynamic_range_from_bit_depth() {
        let buf = InterleavedBuffer::new(vec![0u16; 3], 1, 1, 3, 16).unwrap();
        assert_eq!(buf.dynamic_range(), 65535.0);

        let buf = gray_3x3();
        assert_eq!(buf.dynamic_range(), 255.0);
    }

    #[test]
    fn test_zero_bit_depth_defaults_to_8_bit() {
        // JPEG decoders report no depth field; 0 means 8-bit
        let buf = InterleavedBuffer::new(vec![0u8; 3], 1, 1, 3, 0).unwrap();
        assert_eq!(buf.dynamic_range(), 255.0);
    }

    #[test]
    fn test_float_samples_pass_through() {
        let buf = InterleavedBuffer::new(vec![0.25f32, 0.5, 0.75], 1, 1, 3, 8).unwrap();
        assert_eq!(buf.sample(0, 0, 1).unwrap(), 0.5);
    }
}
