//! Windowed SSIM (structural similarity) core.
//!
//! Computes a structural similarity score between two same-sized images:
//! BT.709 luminance is extracted over a grid of non-overlapping square
//! windows, per-window mean/variance/covariance feed the standard SSIM
//! luminance/contrast/structure formula, and the per-window scores fold
//! into a single mean index plus the full score grid.
//!
//! The crate is the statistical core only. Decoding compressed formats and
//! acquiring bytes from disk or network are collaborator concerns; their
//! contracts live in [`decode`], and the pipeline consumes anything
//! implementing [`PixelBuffer`]. The core itself performs no I/O, keeps no
//! shared state, and every failure is deterministic.
//!
//! # Example
//!
//! ```
//! use ssim_grid::{compute_ssim, InterleavedBuffer, SsimOptions};
//!
//! // Two 16x16 RGB images, one slightly brightened
//! let reference = InterleavedBuffer::new(vec![120u8; 16 * 16 * 3], 16, 16, 3, 8)?;
//! let candidate = InterleavedBuffer::new(vec![124u8; 16 * 16 * 3], 16, 16, 3, 8)?;
//!
//! let result = compute_ssim(&reference, &candidate, &SsimOptions::new())?;
//! assert!(result.index > 0.9 && result.index < 1.0);
//! assert_eq!(result.grid.rows(), 2);
//! # Ok::<(), ssim_grid::SsimError>(())
//! ```
//!
//! Enable the `rayon` feature to score windows in parallel; windows never
//! overlap, so results are identical either way.

#![warn(missing_docs)]

pub mod buffer;
pub mod combine;
pub mod compare;
pub mod decode;
mod error;
pub mod luma;
pub mod stats;
pub mod window;

pub use buffer::{InterleavedBuffer, PixelBuffer};
pub use combine::{PairwiseStats, K1, K2};
pub use compare::{compute_ssim, ScoreGrid, SsimOptions, SsimResult};
pub use decode::{Decode, ImageSource, MediaType};
pub use error::SsimError;
pub use luma::luma;
pub use window::{partition, Window, WindowGrid, DEFAULT_WINDOW_SIZE};
