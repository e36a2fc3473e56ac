//! Mean, variance, and covariance over luminance sample sequences.
//!
//! All three are *population* statistics: the divisor is the sample count,
//! not count minus one, because a window's pixels are the entire population
//! of interest rather than a sample drawn from a larger one.

use crate::SsimError;

/// Arithmetic mean of a sequence.
///
/// # Errors
/// [`SsimError::EmptySequence`] if `xs` is empty; division by zero is
/// never silently produced.
pub fn average(xs: &[f64]) -> Result<f64, SsimError> {
    if xs.is_empty() {
        return Err(SsimError::EmptySequence);
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Population variance: mean of squared deviations from the mean.
///
/// Always >= 0; equals 0 iff all elements are equal.
///
/// # Errors
/// [`SsimError::EmptySequence`] if `xs` is empty.
pub fn variance(xs: &[f64]) -> Result<f64, SsimError> {
    let mean = average(xs)?;
    let sq_diff: Vec<f64> = xs.iter().map(|x| (x - mean).powi(2)).collect();
    average(&sq_diff)
}

/// Population covariance of two paired sequences.
///
/// Symmetric in its arguments; `covariance(xs, xs)` equals `variance(xs)`.
///
/// # Errors
/// - [`SsimError::LengthMismatch`] if the sequences differ in length.
/// - [`SsimError::EmptySequence`] if both are empty.
pub fn covariance(xs: &[f64], ys: &[f64]) -> Result<f64, SsimError> {
    if xs.len() != ys.len() {
        return Err(SsimError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    let mean_x = average(xs)?;
    let mean_y = average(ys)?;
    let products: Vec<f64> = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .collect();
    average(&products)
}
