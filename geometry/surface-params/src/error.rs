//! Error types for surface descriptor validation.

use thiserror::Error;

/// Result type alias for surface descriptor operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors raised when validating fitted surface descriptors.
///
/// Derivation itself never fails. These errors are for checking descriptors
/// received from a fitting engine before they are derived.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SurfaceError {
    /// Radius must be positive and finite.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// Cylinder top and bottom coincide.
    #[error("degenerate cylinder axis: top and bottom are {distance} apart")]
    DegenerateAxis {
        /// Distance between top and bottom.
        distance: f64,
    },

    /// Plane corners do not span a plane.
    #[error("degenerate plane corners: {reason}")]
    DegenerateCorners {
        /// Description of what's wrong with the corners.
        reason: String,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}

impl SurfaceError {
    /// Create a degenerate corners error.
    #[must_use]
    pub fn degenerate_corners(reason: impl Into<String>) -> Self {
        Self::DegenerateCorners {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurfaceError::InvalidRadius(-2.0);
        assert!(format!("{err}").contains("-2"));

        let err = SurfaceError::DegenerateAxis { distance: 0.0 };
        assert!(format!("{err}").contains("axis"));

        let err = SurfaceError::degenerate_corners("edges are parallel");
        assert!(format!("{err}").contains("edges are parallel"));

        let err = SurfaceError::NonFinite("sphere center");
        assert_eq!(format!("{err}"), "non-finite sphere center");
    }
}
