//! Error types for probe validation.

use thiserror::Error;

/// Result type alias for picking operations.
pub type PickResult<T> = Result<T, PickError>;

/// Errors raised when validating probe settings at the system boundary.
///
/// Picking itself never fails: an empty or unreachable cloud yields `None`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PickError {
    /// The probe radius must be positive and finite.
    #[error("probe radius must be positive, got {0}")]
    InvalidProbeRadius(f64),

    /// The touch radius must be positive and finite.
    #[error("touch radius must be positive, got {0}")]
    InvalidTouchRadius(f64),

    /// The viewport has no area.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },

    /// The projection matrix has a non-positive focal scale.
    #[error("projection focal scale must be positive, got {0}")]
    InvalidProjection(f64),
}
