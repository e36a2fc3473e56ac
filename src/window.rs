//! Window partitioning.
//!
//! Divides an image's coordinate space into a grid of equally sized,
//! non-overlapping square windows, clamped to the image bounds. Windows
//! tile in row-major order from (0,0); partial windows that would straddle
//! the right or bottom edge are dropped rather than padded, so every
//! emitted window can be sampled without going out of range.
//!
//! A 10x10 image with requested size 4 therefore yields a 2x2 grid of
//! windows covering an 8x8 region.

use crate::SsimError;

/// Default comparison window size in pixels.
pub const DEFAULT_WINDOW_SIZE: usize = 8;

/// A square subregion of an image, the unit of local comparison.
///
/// Invariant (guaranteed by [`partition`]): `origin_x + size <= width` and
/// `origin_y + size <= height` of the buffer it was partitioned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left edge, in pixels.
    pub origin_x: usize,
    /// Top edge, in pixels.
    pub origin_y: usize,
    /// Side length, in pixels.
    pub size: usize,
}

/// Lazy row-major sequence of the windows tiling one image.
///
/// Iteration is finite and pure: cloning restarts the sequence, and two
/// grids partitioned from the same inputs yield identical windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowGrid {
    size: usize,
    cols: usize,
    rows: usize,
    next: usize,
}

impl WindowGrid {
    /// Number of window rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of window columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Effective window side length after clamping to the image.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.size
    }

    /// Total number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True when the grid holds no windows.
    ///
    /// Never the case for grids produced by [`partition`]: clamping
    /// guarantees at least one window for any non-empty image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for WindowGrid {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.next >= self.rows * self.cols {
            return None;
        }
        let row = self.next / self.cols;
        let col = self.next % self.cols;
        self.next += 1;
        Some(Window {
            origin_x: col * self.size,
            origin_y: row * self.size,
            size: self.size,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows * self.cols - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowGrid {}

/// Partitions a `width` x `height` coordinate space into comparison windows.
///
/// The effective window size is `min(requested_size, width, height)`, so
/// any non-empty image produces at least one window and no window exceeds
/// the image.
///
/// # Errors
/// [`SsimError::EmptyBuffer`] if either dimension is zero.
pub fn partition(
    width: usize,
    height: usize,
    requested_size: usize,
) -> Result<WindowGrid, SsimError> {
    if width == 0 || height == 0 {
        return Err(SsimError::EmptyBuffer { width, height });
    }
    let size = requested_size.min(width).min(height).max(1);
    Ok(WindowGrid {
        size,
        cols: width / size,
        rows: height / size,
        next: 0,
    })
}
