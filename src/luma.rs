//! BT.709 luminance projection.
//!
//! The only color-space operation the core performs: collapsing an RGB
//! sample to the single scalar SSIM compares. Weights are taken from
//! ITU-R BT.709-6, "Derivation of luminance signal" (page 4); they sum to
//! 1.0, so a gray input reproduces itself.

use crate::window::Window;
use crate::{PixelBuffer, SsimError};

/// BT.709 red weight.
pub const WEIGHT_R: f64 = 0.2126;
/// BT.709 green weight.
pub const WEIGHT_G: f64 = 0.7152;
/// BT.709 blue weight.
pub const WEIGHT_B: f64 = 0.0722;

/// Projects an RGB sample to scalar luminance.
///
/// Pure and deterministic; no rounding beyond native floating point. The
/// result stays in the numeric domain of the input (0-255 samples yield
/// 0-255 luminance).
#[inline]
#[must_use]
pub fn luma(rgb: [f64; 3]) -> f64 {
    WEIGHT_R * rgb[0] + WEIGHT_G * rgb[1] + WEIGHT_B * rgb[2]
}

/// Extracts the luminance sample sequence of one window, row-major.
///
/// The sequence length is `window.size * window.size`; corresponding
/// windows of two same-sized images always yield equal-length sequences,
/// which is what makes their covariance well defined.
///
/// # Errors
/// - [`SsimError::InsufficientChannels`] if the buffer has fewer than 3
///   channels.
/// - [`SsimError::OutOfBounds`] if the window exceeds the buffer extent
///   (never produced by [`partition`][crate::window::partition]).
pub fn window_luma<B: PixelBuffer + ?Sized>(
    buffer: &B,
    window: Window,
) -> Result<Vec<f64>, SsimError> {
    if buffer.channels() < 3 {
        return Err(SsimError::InsufficientChannels {
            channels: buffer.channels(),
        });
    }

    let mut samples = Vec::with_capacity(window.size * window.size);
    for y in window.origin_y..window.origin_y + window.size {
        for x in window.origin_x..window.origin_x + window.size {
            let rgb = [
                buffer.sample(x, y, 0)?,
                buffer.sample(x, y, 1)?,
                buffer.sample(x, y, 2)?,
            ];
            samples.push(luma(rgb));
        }
    }
    Ok(samples)
}
