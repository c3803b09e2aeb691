//! The seam to an external surface fitting engine.

use nalgebra::Point3;
use scan_pick::SeedRegion;
use scan_types::CloudSample;
use surface_params::{FittedSurface, SurfaceKind};

use crate::AnchorConfig;

/// A seeded request for one primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest<'a> {
    /// The primitive to search for.
    pub kind: SurfaceKind,
    /// Confidence-filtered samples to fit against.
    pub samples: &'a [CloudSample],
    /// Index of the seed sample in `samples`.
    pub seed_index: usize,
    /// World-space seed point.
    pub seed_point: Point3<f64>,
    /// Radius of the neighborhood around the seed to search.
    pub seed_radius: f64,
    /// Expected measurement accuracy, in meters.
    pub measurement_accuracy: f64,
    /// Expected mean distance between neighboring samples, in meters.
    pub mean_distance: f64,
}

impl<'a> FitRequest<'a> {
    /// Builds a request from a seed region and the fitting tolerances in
    /// `config`.
    #[must_use]
    pub const fn new(
        kind: SurfaceKind,
        samples: &'a [CloudSample],
        seed: &SeedRegion,
        config: &AnchorConfig,
    ) -> Self {
        Self {
            kind,
            samples,
            seed_index: seed.index,
            seed_point: seed.point,
            seed_radius: seed.radius,
            measurement_accuracy: config.measurement_accuracy,
            mean_distance: config.mean_distance,
        }
    }
}

/// Trait for engines that fit primitives to a seeded point cloud region.
///
/// Implement this for the fitting library in use.
pub trait SurfaceFitter {
    /// Engine failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for a primitive around the seed.
    ///
    /// # Arguments
    ///
    /// * `request` - The primitive kind, samples, seed and tolerances
    ///
    /// # Returns
    ///
    /// The fitted primitive, or `None` if no surface of the requested kind
    /// was found.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if fitting could not run.
    fn find_surface(
        &mut self,
        request: &FitRequest<'_>,
    ) -> Result<Option<FittedSurface>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_params::SphereDescriptor;

    struct Fixed(Option<FittedSurface>);

    impl SurfaceFitter for Fixed {
        type Error = std::convert::Infallible;

        fn find_surface(
            &mut self,
            _request: &FitRequest<'_>,
        ) -> Result<Option<FittedSurface>, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_request_from_seed() {
        let samples = [CloudSample::from_coords(0.0, 0.0, -2.0, 2.0)];
        let seed = SeedRegion {
            index: 0,
            point: Point3::new(0.0, 0.0, -2.0),
            radius: 0.3,
        };
        let config = AnchorConfig::default();
        let request = FitRequest::new(SurfaceKind::Sphere, &samples, &seed, &config);

        assert_eq!(request.kind, SurfaceKind::Sphere);
        assert_eq!(request.samples.len(), 1);
        assert_eq!(request.seed_index, 0);
        assert!((request.seed_radius - 0.3).abs() < f64::EPSILON);
        assert!((request.measurement_accuracy - 0.02).abs() < f64::EPSILON);
        assert!((request.mean_distance - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fixed_fitter() {
        let sphere = FittedSurface::Sphere(SphereDescriptor::new(Point3::origin(), 1.0));
        let mut fitter = Fixed(Some(sphere));
        let seed = SeedRegion {
            index: 0,
            point: Point3::origin(),
            radius: 0.1,
        };
        let request = FitRequest::new(SurfaceKind::Sphere, &[], &seed, &AnchorConfig::default());
        assert_eq!(fitter.find_surface(&request), Ok(Some(sphere)));
    }
}
