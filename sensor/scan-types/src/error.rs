//! Error types for scan data conversion.

use thiserror::Error;

/// Result type alias for scan data operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur when importing or interpreting scan data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// A flat sample buffer is not a whole number of `(x, y, z, confidence)` samples.
    #[error("sample buffer length {len} is not a multiple of {stride}")]
    RaggedBuffer {
        /// Length of the flat buffer.
        len: usize,
        /// Number of components per sample.
        stride: usize,
    },

    /// A raw confidence code does not name a known level.
    #[error("unknown confidence level: {0}")]
    UnknownConfidence(i64),

    /// A coordinate is `NaN` or infinite where a finite value is required.
    #[error("non-finite coordinate: {0}")]
    NonFinite(String),
}

impl ScanError {
    /// Creates a ragged buffer error.
    #[must_use]
    pub const fn ragged(len: usize, stride: usize) -> Self {
        Self::RaggedBuffer { len, stride }
    }

    /// Creates a non-finite coordinate error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>) -> Self {
        Self::NonFinite(context.into())
    }
}
