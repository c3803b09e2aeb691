//! End-to-end anchoring: filter, pick, fit, derive, place.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use scan_pick::{PickParams, ProbeRadii, SeedRegion};
use scan_types::{CameraPose, PointCloud};
use surface_params::{FittedSurface, SurfaceKind, derive_cylinder, derive_plane, derive_sphere};
use tracing::{debug, info, warn};

use crate::{
    Anchor, AnchorConfig, AnchorError, AnchorResult, FitRequest, SurfaceFitter, anchor_cylinder,
    anchor_plane, anchor_sphere,
};

/// The outcome of a successful anchoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchoredSurface {
    /// Seed handed to the fitting engine. The index refers to the
    /// confidence-filtered samples.
    pub seed: SeedRegion,
    /// The fitted primitive.
    pub surface: FittedSurface,
    /// Where to place content.
    pub anchor: Anchor,
}

/// Finds a surface of `kind` under the camera's view ray and anchors
/// content to it.
///
/// # Steps
///
/// 1. Drop samples below `config.min_confidence`
/// 2. Pick the sample on the camera's view ray using `radii.probe`
/// 3. Build the seed region with `radii.touch`
/// 4. Ask `fitter` for a primitive around the seed
/// 5. Derive camera-relative parameters and place content
///
/// Each call is independent; serializing fits is left to the caller.
///
/// # Errors
///
/// - [`AnchorError::InvalidConfig`] / [`AnchorError::Probe`] for bad settings
/// - [`AnchorError::NoSeedPoint`] when no sample lies in front of the camera
/// - [`AnchorError::Fitter`] when the engine fails
/// - [`AnchorError::SurfaceNotFound`] / [`AnchorError::KindMismatch`] /
///   [`AnchorError::InvalidSurface`] for unusable engine output
/// - [`AnchorError::Unplaceable`] when content cannot be placed on the surface
pub fn anchor_surface<F: SurfaceFitter>(
    cloud: &PointCloud,
    camera: &CameraPose,
    radii: &ProbeRadii,
    kind: SurfaceKind,
    fitter: &mut F,
    config: &AnchorConfig,
) -> AnchorResult<AnchoredSurface> {
    config.validate()?;

    let filtered = cloud.filtered_by_confidence(config.min_confidence);
    let samples = filtered.samples();
    debug!(
        total = cloud.len(),
        kept = samples.len(),
        min_confidence = ?config.min_confidence,
        "Confidence filter applied"
    );

    let ray = camera.view_ray();
    let pick = PickParams::from_radii(radii)
        .pick(&ray, samples)?
        .ok_or(AnchorError::NoSeedPoint {
            candidates: samples.len(),
        })?;
    let seed = SeedRegion::from_pick(&pick, samples, radii.touch).ok_or(
        AnchorError::NoSeedPoint {
            candidates: samples.len(),
        },
    )?;
    debug!(
        index = seed.index,
        tier = ?pick.tier,
        radius = seed.radius,
        "Seed region selected"
    );

    let request = FitRequest::new(kind, samples, &seed, config);
    let surface = fitter
        .find_surface(&request)
        .map_err(AnchorError::fitter)?
        .ok_or(AnchorError::SurfaceNotFound { kind })?;
    if surface.kind() != kind {
        return Err(AnchorError::KindMismatch {
            requested: kind,
            found: surface.kind(),
        });
    }
    surface.validate()?;

    let placed = match &surface {
        FittedSurface::Plane(plane) => {
            anchor_plane(&derive_plane(plane, camera), camera, config)
        }
        FittedSurface::Sphere(sphere) => {
            let derived = derive_sphere(sphere, camera, &seed.point, config.convention);
            anchor_sphere(sphere, &derived, camera)
        }
        FittedSurface::Cylinder(cylinder) => {
            let derived = derive_cylinder(cylinder, camera, &seed.point, config.convention);
            anchor_cylinder(cylinder, &derived)
        }
    };

    let anchor = placed.inspect_err(|reason| {
        warn!(?kind, %reason, "Fitted surface rejected for placement");
    })?;

    info!(
        ?kind,
        anchor = ?anchor.kind,
        x = anchor.pose.position.x,
        y = anchor.pose.position.y,
        z = anchor.pose.position.z,
        "Surface anchored"
    );

    Ok(AnchoredSurface {
        seed,
        surface,
        anchor,
    })
}
