//! Error types for SSIM computation.
//!
//! Every failure is deterministic given the same inputs and is reported at
//! its origin with no partial result. The core never substitutes defaults
//! for malformed data; a masked dimension or channel mismatch would corrupt
//! the similarity score.

use thiserror::Error;

/// Errors produced by the SSIM core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SsimError {
    /// A zero-area image was passed to partitioning.
    #[error("image has zero area ({width}x{height})")]
    EmptyBuffer {
        /// Buffer width in pixels.
        width: usize,
        /// Buffer height in pixels.
        height: usize,
    },

    /// A sample was requested outside the buffer extent.
    ///
    /// This indicates a programming error in the caller or the decoding
    /// collaborator; correct windowing never samples out of range.
    #[error(
        "sample ({x}, {y}) channel {channel} outside {width}x{height} buffer with {channels} channels"
    )]
    OutOfBounds {
        /// Requested x coordinate.
        x: usize,
        /// Requested y coordinate.
        y: usize,
        /// Requested channel index.
        channel: usize,
        /// Buffer width in pixels.
        width: usize,
        /// Buffer height in pixels.
        height: usize,
        /// Number of channels per pixel.
        channels: usize,
    },

    /// Luminance projection requested on a buffer with fewer than 3 channels.
    #[error("luminance requires at least 3 channels, buffer has {channels}")]
    InsufficientChannels {
        /// Number of channels per pixel.
        channels: usize,
    },

    /// A statistic was requested over an empty sequence.
    #[error("statistic requested over an empty sequence")]
    EmptySequence,

    /// Covariance was requested over sequences of differing length.
    ///
    /// Unreachable through correct windowing (corresponding windows always
    /// yield equal-length sequences) but detected rather than silently
    /// truncated.
    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// The reference and candidate buffers differ in size.
    #[error(
        "image dimensions differ: reference {ref_width}x{ref_height}, candidate {cand_width}x{cand_height}"
    )]
    DimensionMismatch {
        /// Reference buffer width.
        ref_width: usize,
        /// Reference buffer height.
        ref_height: usize,
        /// Candidate buffer width.
        cand_width: usize,
        /// Candidate buffer height.
        cand_height: usize,
    },

    /// A decode was requested for an unrecognized media type.
    #[error("unsupported media type: {0}")]
    UnsupportedFormat(String),

    /// The sample data handed to a buffer constructor does not match the
    /// declared dimensions.
    #[error("sample data length {actual} does not match {width}x{height}x{channels} = {expected}")]
    InvalidBufferLength {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Declared channel count.
        channels: usize,
        /// `width * height * channels`.
        expected: usize,
        /// Length of the provided sample slice.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_values() {
        let err = SsimError::DimensionMismatch {
            ref_width: 3,
            ref_height: 3,
            cand_width: 4,
            cand_height: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("3x3"), "message was: {msg}");
        assert!(msg.contains("4x4"), "message was: {msg}");

        let err = SsimError::UnsupportedFormat("image/webp".into());
        assert!(err.to_string().contains("image/webp"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(SsimError::EmptySequence, SsimError::EmptySequence);
        assert_ne!(
            SsimError::EmptySequence,
            SsimError::LengthMismatch { left: 1, right: 2 }
        );
    }
}
