//! Configuration and presets for surface anchoring.
//!
//! # Presets
//!
//! - [`AnchorConfig::default()`] - High-confidence samples, content wraps
//!   around curved surfaces
//! - [`AnchorConfig::for_noisy_scans()`] - Admits medium-confidence samples
//!   and asks the fitting engine for a looser fit
//! - [`AnchorConfig::standing_props()`] - Content stands on curved surfaces
//!
//! # Example
//!
//! ```
//! use surface_anchor::AnchorConfig;
//! use surface_params::OrientationConvention;
//! use scan_types::ConfidenceLevel;
//!
//! let config = AnchorConfig::default()
//!     .with_min_confidence(ConfidenceLevel::Medium)
//!     .with_convention(OrientationConvention::OnSurface);
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Vector3;
use scan_types::ConfidenceLevel;
use surface_params::OrientationConvention;

use crate::{AnchorError, AnchorResult};

/// Configuration for anchoring content to a fitted surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorConfig {
    /// World up direction (unit length).
    pub world_up: Vector3<f64>,

    /// Planes whose normal has `|normal · up|` below this are walls.
    pub wall_threshold: f64,

    /// Planes whose normal has `|normal · up|` above this are floors or
    /// ceilings. Anything between the two thresholds is a slope.
    pub level_threshold: f64,

    /// Expected measurement accuracy passed to the fitting engine, in meters.
    pub measurement_accuracy: f64,

    /// Expected mean distance between neighboring samples, in meters.
    pub mean_distance: f64,

    /// Samples below this confidence are dropped before picking.
    pub min_confidence: ConfidenceLevel,

    /// How sphere and cylinder frames are arranged.
    pub convention: OrientationConvention,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            world_up: Vector3::y(),
            wall_threshold: 0.15,
            level_threshold: 0.99,
            measurement_accuracy: 0.02,
            mean_distance: 0.2,
            min_confidence: ConfidenceLevel::High,
            convention: OrientationConvention::RoundingSurface,
        }
    }
}

impl AnchorConfig {
    /// Create configuration for noisy or sparse scans.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_anchor::AnchorConfig;
    ///
    /// let config = AnchorConfig::for_noisy_scans();
    /// assert!(config.measurement_accuracy > AnchorConfig::default().measurement_accuracy);
    /// ```
    #[must_use]
    pub fn for_noisy_scans() -> Self {
        Self {
            measurement_accuracy: 0.05,
            mean_distance: 0.3,
            min_confidence: ConfidenceLevel::Medium,
            ..Self::default()
        }
    }

    /// Create configuration for content that stands on spheres and
    /// cylinders rather than wrapping around them.
    #[must_use]
    pub fn standing_props() -> Self {
        Self {
            convention: OrientationConvention::OnSurface,
            ..Self::default()
        }
    }

    /// Set the world up direction (unit length).
    #[must_use]
    pub const fn with_world_up(mut self, up: Vector3<f64>) -> Self {
        self.world_up = up;
        self
    }

    /// Set the wall classification threshold.
    #[must_use]
    pub const fn with_wall_threshold(mut self, threshold: f64) -> Self {
        self.wall_threshold = threshold;
        self
    }

    /// Set the floor/ceiling classification threshold.
    #[must_use]
    pub const fn with_level_threshold(mut self, threshold: f64) -> Self {
        self.level_threshold = threshold;
        self
    }

    /// Set the measurement accuracy passed to the fitting engine.
    #[must_use]
    pub const fn with_measurement_accuracy(mut self, accuracy: f64) -> Self {
        self.measurement_accuracy = accuracy;
        self
    }

    /// Set the mean sample distance passed to the fitting engine.
    #[must_use]
    pub const fn with_mean_distance(mut self, distance: f64) -> Self {
        self.mean_distance = distance;
        self
    }

    /// Set the minimum sample confidence.
    #[must_use]
    pub const fn with_min_confidence(mut self, level: ConfidenceLevel) -> Self {
        self.min_confidence = level;
        self
    }

    /// Set the orientation convention for curved surfaces.
    #[must_use]
    pub const fn with_convention(mut self, convention: OrientationConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorError::InvalidConfig`] if the up vector is not unit
    /// length, the thresholds are not ordered within `[0, 1]`, or the fitting
    /// tolerances are not positive.
    pub fn validate(&self) -> AnchorResult<()> {
        if (self.world_up.norm() - 1.0).abs() > 1e-6 {
            return Err(AnchorError::invalid_config(format!(
                "world up must be unit length, got norm {}",
                self.world_up.norm()
            )));
        }
        let ordered = 0.0 <= self.wall_threshold
            && self.wall_threshold <= self.level_threshold
            && self.level_threshold <= 1.0;
        if !ordered {
            return Err(AnchorError::invalid_config(format!(
                "thresholds must satisfy 0 <= wall ({}) <= level ({}) <= 1",
                self.wall_threshold, self.level_threshold
            )));
        }
        if !(self.measurement_accuracy > 0.0 && self.mean_distance > 0.0) {
            return Err(AnchorError::invalid_config(
                "measurement accuracy and mean distance must be positive",
            ));
        }
        Ok(())
    }
}
