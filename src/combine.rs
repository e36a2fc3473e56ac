//! The per-window SSIM score.
//!
//! Combines the paired statistics of one window into a single score via
//! the standard decomposition into luminance, contrast, and structure
//! comparisons, multiplied together:
//!
//! ```text
//! ssim = ((2*mu_a*mu_b + c1) * (2*cov + c2))
//!      / ((mu_a^2 + mu_b^2 + c1) * (var_a + var_b + c2))
//! ```
//!
//! `c1` and `c2` stabilize the divisions when means or variances approach
//! zero; because both are strictly positive, the combiner never fails for
//! finite inputs.

use crate::stats::{average, covariance, variance};
use crate::SsimError;

/// Stabilizing constant for the luminance comparison (standard SSIM value).
pub const K1: f64 = 0.01;
/// Stabilizing constant for the contrast comparison (standard SSIM value).
pub const K2: f64 = 0.03;

/// The five statistics SSIM needs from one pair of corresponding windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairwiseStats {
    /// Mean luminance of the reference window.
    pub mean_a: f64,
    /// Mean luminance of the candidate window.
    pub mean_b: f64,
    /// Population variance of the reference window.
    pub var_a: f64,
    /// Population variance of the candidate window.
    pub var_b: f64,
    /// Population covariance across the two windows.
    pub covariance: f64,
}

impl PairwiseStats {
    /// Derives the paired statistics from two corresponding luminance
    /// sequences.
    ///
    /// # Errors
    /// - [`SsimError::LengthMismatch`] if the sequences differ in length.
    /// - [`SsimError::EmptySequence`] if they are empty.
    pub fn from_sequences(xs: &[f64], ys: &[f64]) -> Result<Self, SsimError> {
        Ok(Self {
            mean_a: average(xs)?,
            mean_b: average(ys)?,
            var_a: variance(xs)?,
            var_b: variance(ys)?,
            covariance: covariance(xs, ys)?,
        })
    }

    /// Computes the SSIM score of this window pair.
    ///
    /// `dynamic_range` is the maximum representable sample value (255 for
    /// 8-bit depth); it scales `c1` and `c2`. The result lies in
    /// `[-1, 1]`, with 1 meaning structurally identical windows.
    #[must_use]
    pub fn ssim(&self, dynamic_range: f64) -> f64 {
        let c1 = (K1 * dynamic_range).powi(2);
        let c2 = (K2 * dynamic_range).powi(2);

        let numerator = (2.0 * self.mean_a * self.mean_b + c1) * (2.0 * self.covariance + c2);
        let denominator =
            (self.mean_a.powi(2) + self.mean_b.powi(2) + c1) * (self.var_a + self.var_b + c2);

        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_windows_score_one() {
        let xs = [10.0, 20.0, 30.0, 40.0];
        let stats = PairwiseStats::from_sequences(&xs, &xs).unwrap();
        assert!((stats.ssim(255.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_flat_windows_score_one() {
        // Both mean products and variances cancel; only c1/c2 remain
        let xs = [128.0; 9];
        let stats = PairwiseStats::from_sequences(&xs, &xs).unwrap();
        assert!((stats.ssim(255.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_differing_windows_score_below_one() {
        let xs = [10.0, 20.0, 30.0, 40.0];
        let ys = [40.0, 30.0, 20.0, 10.0];
        let stats = PairwiseStats::from_sequences(&xs, &ys).unwrap();
        let score = stats.ssim(255.0);
        assert!(score < 1.0);
        assert!(score >= -1.0);
    }

    #[test]
    fn test_zero_statistics_do_not_divide_by_zero() {
        // All-black windows: every statistic is zero, c1/c2 carry the score
        let stats = PairwiseStats::from_sequences(&[0.0; 4], &[0.0; 4]).unwrap();
        let score = stats.ssim(255.0);
        assert!(score.is_finite());
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dynamic_range_scales_the_constants() {
        // A fixed luminance offset hurts more at a smaller dynamic range
        let xs = [100.0; 4];
        let ys = [110.0; 4];
        let stats = PairwiseStats::from_sequences(&xs, &ys).unwrap();
        let wide = stats.ssim(65535.0);
        let narrow = stats.ssim(255.0);
        assert!(narrow < wide);
    }

    #[test]
    fn test_from_sequences_propagates_length_mismatch() {
        assert_eq!(
            PairwiseStats::from_sequences(&[1.0], &[1.0, 2.0]).unwrap_err(),
            SsimError::LengthMismatch { left: 1, right: 2 }
        );
    }

    #[test]
    fn test_from_sequences_matches_stats_engine() {
        let xs = [0.0, 10.0];
        let stats = PairwiseStats::from_sequences(&xs, &xs).unwrap();
        assert_eq!(stats.mean_a, 5.0);
        assert_eq!(stats.var_a, 25.0);
        assert_eq!(stats.covariance, 25.0);
    }
}
