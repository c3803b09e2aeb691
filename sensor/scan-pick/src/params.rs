//! Parameters for point picking.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use scan_types::{CloudSample, Ray};

use crate::{Pick, PickError, PickResult, ProbeRadii, pick_point};

/// Parameters for point picking.
///
/// # Example
///
/// ```
/// use scan_pick::PickParams;
/// use scan_types::{CloudSample, Ray};
/// use nalgebra::{Point3, Vector3};
///
/// let params = PickParams::default();
/// assert!((params.probe_radius - 0.01).abs() < 1e-12);
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0));
/// let samples = [CloudSample::from_coords(0.0, 0.0, -2.0, 2.0)];
/// let pick = params.pick(&ray, &samples).unwrap();
/// assert_eq!(pick.map(|p| p.index), Some(0));
///
/// // Non-positive probe radii are rejected before any sample is visited.
/// assert!(PickParams::with_probe_radius(0.0).pick(&ray, &samples).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PickParams {
    /// Probe radius per unit of depth along the ray.
    pub probe_radius: f64,

    /// Clouds with at least this many samples are scanned in parallel when
    /// the `parallel` feature is enabled.
    pub parallel_threshold: usize,
}

impl Default for PickParams {
    fn default() -> Self {
        Self {
            probe_radius: 0.01, // ~10px on a phone screen
            parallel_threshold: 100_000,
        }
    }
}

impl PickParams {
    /// Create params for a narrow probe, suited to dense clouds.
    #[must_use]
    pub const fn precise() -> Self {
        Self {
            probe_radius: 0.004,
            parallel_threshold: 100_000,
        }
    }

    /// Create params for a wide probe, suited to sparse or distant geometry.
    #[must_use]
    pub const fn coarse() -> Self {
        Self {
            probe_radius: 0.05,
            parallel_threshold: 100_000,
        }
    }

    /// Create params with a custom probe radius.
    #[must_use]
    pub const fn with_probe_radius(probe_radius: f64) -> Self {
        Self {
            probe_radius,
            parallel_threshold: 100_000,
        }
    }

    /// Create params from viewport-derived radii.
    #[must_use]
    pub const fn from_radii(radii: &ProbeRadii) -> Self {
        Self::with_probe_radius(radii.probe)
    }

    /// Set the probe radius.
    #[must_use]
    pub const fn probe_radius(mut self, radius: f64) -> Self {
        self.probe_radius = radius;
        self
    }

    /// Set the sample count from which parallel scanning kicks in.
    #[must_use]
    pub const fn parallel_threshold(mut self, count: usize) -> Self {
        self.parallel_threshold = count;
        self
    }

    /// Checks that the probe radius is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::InvalidProbeRadius`] otherwise.
    pub fn validate(&self) -> PickResult<()> {
        if self.probe_radius.is_finite() && self.probe_radius > 0.0 {
            Ok(())
        } else {
            Err(PickError::InvalidProbeRadius(self.probe_radius))
        }
    }

    /// Validates the params, then picks the sample `ray` points at.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid params. An empty or unreachable
    /// cloud gives `Ok(None)`.
    pub fn pick(&self, ray: &Ray, samples: &[CloudSample]) -> PickResult<Option<Pick>> {
        self.validate()?;

        #[cfg(feature = "parallel")]
        if samples.len() >= self.parallel_threshold {
            return Ok(crate::pick_point_parallel(ray, samples, self.probe_radius));
        }

        Ok(pick_point(ray, samples, self.probe_radius))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_default_params() {
        let params = PickParams::default();
        assert!((params.probe_radius - 0.01).abs() < f64::EPSILON);
        assert_eq!(params.parallel_threshold, 100_000);
    }

    #[test]
    fn test_presets() {
        assert!(PickParams::precise().probe_radius < PickParams::default().probe_radius);
        assert!(PickParams::coarse().probe_radius > PickParams::default().probe_radius);
    }

    #[test]
    fn test_from_radii() {
        let radii = ProbeRadii::new(0.2, 0.03).unwrap();
        let params = PickParams::from_radii(&radii);
        assert!((params.probe_radius - 0.03).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let params = PickParams::default().probe_radius(0.2).parallel_threshold(10);
        assert!((params.probe_radius - 0.2).abs() < f64::EPSILON);
        assert_eq!(params.parallel_threshold, 10);
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PickParams::with_probe_radius(radius).validate(),
                Err(PickError::InvalidProbeRadius(_))
            ));
        }
    }

    #[test]
    fn test_pick_matches_free_function() {
        let ray = Ray::new(Point3::origin(), -Vector3::z());
        let samples = [
            CloudSample::from_coords(0.5, 0.0, -2.0, 2.0),
            CloudSample::from_coords(0.0, 0.01, -4.0, 2.0),
        ];
        // A low threshold exercises the parallel path when it is enabled.
        let params = PickParams::with_probe_radius(0.05).parallel_threshold(1);
        assert_eq!(
            params.pick(&ray, &samples).unwrap(),
            pick_point(&ray, &samples, 0.05)
        );
    }

    #[test]
    fn test_pick_empty_is_ok_none() {
        let ray = Ray::new(Point3::origin(), -Vector3::z());
        assert!(PickParams::default().pick(&ray, &[]).unwrap().is_none());
    }
}
