//! Seed regions for the surface fitting engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Point3;
use scan_types::CloudSample;

use crate::Pick;

/// The seed handed to a surface fitting engine.
///
/// The seed radius is the touch radius scaled by the picked sample's depth,
/// so the on-screen touch circle maps to a world-space neighborhood around
/// the seed point.
///
/// # Example
///
/// ```
/// use scan_pick::{pick_point, SeedRegion};
/// use scan_types::{CloudSample, Ray};
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0));
/// let samples = [CloudSample::from_coords(0.0, 0.0, -4.0, 2.0)];
///
/// let pick = pick_point(&ray, &samples, 0.05).unwrap();
/// let seed = SeedRegion::from_pick(&pick, &samples, 0.1).unwrap();
///
/// assert_eq!(seed.index, 0);
/// assert!((seed.radius - 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedRegion {
    /// Index of the seed sample.
    pub index: usize,
    /// World-space seed point.
    pub point: Point3<f64>,
    /// World-space radius of the seed neighborhood.
    pub radius: f64,
}

impl SeedRegion {
    /// Builds the seed region for a pick.
    ///
    /// `samples` must be the slice the pick was made against and
    /// `touch_radius` is in radius-per-unit-depth form.
    /// Returns `None` if the pick index is out of range for `samples`.
    #[must_use]
    pub fn from_pick(pick: &Pick, samples: &[CloudSample], touch_radius: f64) -> Option<Self> {
        let sample = samples.get(pick.index)?;
        Some(Self {
            index: pick.index,
            point: sample.position,
            radius: touch_radius * pick.depth.abs(),
        })
    }
}
