//! The comparison pipeline: partition, score every window, aggregate.
//!
//! This is the crate's entry point. Both buffers are partitioned with the
//! same window grid (their dimensions are verified equal first), each pair
//! of corresponding windows is scored independently, and the scores fold
//! into a mean index plus the full per-window grid.
//!
//! Per-window scoring is embarrassingly parallel: windows never overlap
//! and buffers are read-only during comparison. With the `rayon` feature
//! enabled the windows are scored across the thread pool; the scores land
//! at the same grid coordinates either way.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::combine::PairwiseStats;
use crate::luma::window_luma;
use crate::stats::average;
use crate::window::{partition, Window, DEFAULT_WINDOW_SIZE};
use crate::{PixelBuffer, SsimError};

/// Options for one SSIM comparison.
///
/// ```
/// use ssim_grid::SsimOptions;
///
/// let options = SsimOptions::new().window_size(11).dynamic_range(1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SsimOptions {
    window_size: usize,
    dynamic_range: Option<f64>,
}

impl Default for SsimOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            dynamic_range: None,
        }
    }
}

impl SsimOptions {
    /// Options with the default 8-pixel windows and the dynamic range
    /// derived from the reference buffer's bit depth.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comparison window size (clamped to the image dimensions at
    /// partition time). Values below 1 are treated as 1.
    #[must_use]
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size.max(1);
        self
    }

    /// Overrides the dynamic range used to scale the stabilizing
    /// constants. Useful for buffers holding normalized 0-1 samples.
    #[must_use]
    pub fn dynamic_range(mut self, range: f64) -> Self {
        self.dynamic_range = Some(range);
        self
    }
}

/// The per-window SSIM scores of one comparison, in window-grid
/// coordinates. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreGrid {
    scores: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ScoreGrid {
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

    /// The score of the window at `(row, col)`, or `None` outside the
    /// grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.scores[row * self.cols + col])
        } else {
            None
        }
    }

    /// All scores in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.iter().copied()
    }

    /// Total number of scored windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no windows were scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// The outcome of one comparison: the mean index plus the score grid it
/// was folded from.
#[derive(Clone, Debug, PartialEq)]
pub struct SsimResult {
    /// Unweighted mean of all per-window scores, in `[-1, 1]`.
    pub index: f64,
    /// The full per-window score grid.
    pub grid: ScoreGrid,
}

fn score_window<R, C>(
    reference: &R,
    candidate: &C,
    window: Window,
    dynamic_range: f64,
) -> Result<f64, SsimError>
where
    R: PixelBuffer + ?Sized,
    C: PixelBuffer + ?Sized,
{
    let ref_luma = window_luma(reference, window)?;
    let cand_luma = window_luma(candidate, window)?;
    let stats = PairwiseStats::from_sequences(&ref_luma, &cand_luma)?;
    Ok(stats.ssim(dynamic_range))
}

/// Computes the SSIM index and score grid for a pair of images.
///
/// The dynamic range scaling `c1`/`c2` comes from
/// [`SsimOptions::dynamic_range`] when set, otherwise from the reference
/// buffer's declared bit depth.
///
/// # Errors
/// - [`SsimError::DimensionMismatch`] if the buffers differ in width or
///   height (checked before any windowing).
/// - [`SsimError::EmptyBuffer`] if the shared dimensions have zero area.
/// - [`SsimError::InsufficientChannels`] if either buffer has fewer than
///   3 channels.
///
/// ```
/// use ssim_grid::{compute_ssim, InterleavedBuffer, SsimOptions};
///
/// let gray = InterleavedBuffer::new(vec![128u8; 3 * 3 * 3], 3, 3, 3, 8)?;
/// let result = compute_ssim(&gray, &gray.clone(), &SsimOptions::new().window_size(3))?;
/// assert_eq!(result.index, 1.0);
/// # Ok::<(), ssim_grid::SsimError>(())
/// ```
pub fn compute_ssim<R, C>(
    reference: &R,
    candidate: &C,
    options: &SsimOptions,
) -> Result<SsimResult, SsimError>
where
    R: PixelBuffer + Sync + ?Sized,
    C: PixelBuffer + Sync + ?Sized,
{
    if reference.width() != candidate.width() || reference.height() != candidate.height() {
        return Err(SsimError::DimensionMismatch {
            ref_width: reference.width(),
            ref_height: reference.height(),
            cand_width: candidate.width(),
            cand_height: candidate.height(),
        });
    }

    let dynamic_range = options
        .dynamic_range
        .unwrap_or_else(|| reference.dynamic_range());

    let grid = partition(reference.width(), reference.height(), options.window_size)?;
    let rows = grid.rows();
    let cols = grid.cols();

    #[cfg(feature = "rayon")]
    let scores = {
        let windows: Vec<Window> = grid.collect();
        windows
            .into_par_iter()
            .map(|w| score_window(reference, candidate, w, dynamic_range))
            .collect::<Result<Vec<f64>, SsimError>>()?
    };

    #[cfg(not(feature = "rayon"))]
    let scores = grid
        .map(|w| score_window(reference, candidate, w, dynamic_range))
        .collect::<Result<Vec<f64>, SsimError>>()?;

    let index = average(&scores)?;
    Ok(SsimResult {
        index,
        grid: ScoreGrid { scores, rows, cols },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InterleavedBuffer;

    fn gray_buffer(width: usize, height: usize, value: u8) -> InterleavedBuffer<u8> {
        InterleavedBuffer::new(vec![value; width * height * 3], width, height, 3, 8).unwrap()
    }

    #[test]
    fn test_self_comparison_scores_one_everywhere() {
        let img = gray_buffer(16, 16, 90);
        let result = compute_ssim(&img, &img.clone(), &SsimOptions::new()).unwrap();

        assert_eq!(result.index, 1.0);
        assert_eq!(result.grid.rows(), 2);
        assert_eq!(result.grid.cols(), 2);
        for score in result.grid.iter() {
            assert_eq!(score, 1.0);
        }
    }

    #[test]
    fn test_dimension_mismatch_detected_before_windowing() {
        let a = gray_buffer(3, 3, 128);
        let b = gray_buffer(4, 4, 128);
        assert_eq!(
            compute_ssim(&a, &b, &SsimOptions::new()).unwrap_err(),
            SsimError::DimensionMismatch {
                ref_width: 3,
                ref_height: 3,
                cand_width: 4,
                cand_height: 4,
            }
        );
    }

    #[test]
    fn test_grid_shape_for_non_square_image() {
        let a = gray_buffer(20, 12, 64);
        let b = gray_buffer(20, 12, 64);
        let result = compute_ssim(&a, &b, &SsimOptions::new().window_size(4)).unwrap();
        assert_eq!(result.grid.cols(), 5);
        assert_eq!(result.grid.rows(), 3);
        assert_eq!(result.grid.len(), 15);
    }

    #[test]
    fn test_grid_get_bounds() {
        let img = gray_buffer(16, 8, 10);
        let result = compute_ssim(&img, &img.clone(), &SsimOptions::new()).unwrap();
        assert!(result.grid.get(0, 1).is_some());
        assert!(result.grid.get(1, 0).is_none());
        assert!(result.grid.get(0, 2).is_none());
    }

    #[test]
    fn test_differing_images_score_below_one() {
        let a = gray_buffer(8, 8, 60);
        let b = gray_buffer(8, 8, 200);
        let result = compute_ssim(&a, &b, &SsimOptions::new()).unwrap();
        assert!(result.index < 1.0);
        assert!(result.index >= -1.0);
    }

    #[test]
    fn test_dynamic_range_override_changes_score() {
        let a = gray_buffer(8, 8, 100);
        let b = gray_buffer(8, 8, 110);

        let derived = compute_ssim(&a, &b, &SsimOptions::new()).unwrap();
        let widened = compute_ssim(&a, &b, &SsimOptions::new().dynamic_range(65535.0)).unwrap();
        assert!(widened.index > derived.index);
    }

    #[test]
    fn test_index_is_mean_of_grid() {
        // Left half flat, right half noisy against a flat candidate
        let mut data = vec![100u8; 16 * 8 * 3];
        for y in 0..8 {
            for x in 8..16 {
                let idx = (y * 16 + x) * 3;
                let v = if (x + y) % 2 == 0 { 30 } else { 220 };
                data[idx] = v;
                data[idx + 1] = v;
                data[idx + 2] = v;
            }
        }
        let a = InterleavedBuffer::new(data, 16, 8, 3, 8).unwrap();
        let b = gray_buffer(16, 8, 100);

        let result = compute_ssim(&a, &b, &SsimOptions::new()).unwrap();
        let mean: f64 = result.grid.iter().sum::<f64>() / result.grid.len() as f64;
        assert!((result.index - mean).abs() < 1e-12);
        // The flat window matches, the noisy one does not
        assert_eq!(result.grid.get(0, 0), Some(1.0));
        assert!(result.grid.get(0, 1).unwrap() < 1.0);
    }

    #[test]
    fn test_window_size_zero_is_clamped() {
        let img = gray_buffer(4, 4, 50);
        let result = compute_ssim(&img, &img.clone(), &SsimOptions::new().window_size(0)).unwrap();
        assert_eq!(result.index, 1.0);
    }

    #[test]
    fn test_options_defaults() {
        let options = SsimOptions::new();
        assert_eq!(options, SsimOptions::default());
        assert_eq!(options.window_size, 8);
        assert_eq!(options.dynamic_range, None);
    }
}
