//! Error types for surface anchoring.

use scan_pick::PickError;
use surface_params::{SurfaceError, SurfaceKind};
use thiserror::Error;

use crate::Unplaceable;

/// Result type alias for anchoring operations.
pub type AnchorResult<T> = Result<T, AnchorError>;

/// Errors that can occur while anchoring content to a scanned surface.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnchorError {
    /// The configuration is invalid.
    #[error("invalid anchor config: {reason}")]
    InvalidConfig {
        /// Description of what's wrong with the config.
        reason: String,
    },

    /// The probe settings were rejected.
    #[error("invalid probe: {0}")]
    Probe(#[from] PickError),

    /// No sample of sufficient confidence lies in front of the camera.
    #[error("no seed point: {candidates} samples passed the confidence filter")]
    NoSeedPoint {
        /// Number of samples left after confidence filtering.
        candidates: usize,
    },

    /// The fitting engine found no surface around the seed.
    #[error("no {kind:?} found around the seed point")]
    SurfaceNotFound {
        /// The requested surface kind.
        kind: SurfaceKind,
    },

    /// The fitting engine returned a different kind than requested.
    #[error("requested a {requested:?} but the fitting engine returned a {found:?}")]
    KindMismatch {
        /// The requested surface kind.
        requested: SurfaceKind,
        /// The kind that was returned.
        found: SurfaceKind,
    },

    /// The fitting engine failed.
    #[error("surface fitting engine failed: {0}")]
    Fitter(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The fitting engine returned a degenerate surface.
    #[error("invalid fitted surface: {0}")]
    InvalidSurface(#[from] SurfaceError),

    /// The surface was found but content cannot be placed on it.
    #[error("surface cannot be anchored: {0}")]
    Unplaceable(Unplaceable),
}

impl AnchorError {
    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Wrap a fitting engine error.
    #[must_use]
    pub fn fitter(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fitter(Box::new(source))
    }
}

impl From<Unplaceable> for AnchorError {
    fn from(reason: Unplaceable) -> Self {
        Self::Unplaceable(reason)
    }
}
