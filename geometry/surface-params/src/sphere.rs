//! Convexity, hit point and orientation for a fitted sphere.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Point3, Vector3};
use scan_types::CameraPose;

use crate::intersect::nearest_root;
use crate::{AxisFrame, OrientationConvention, SphereDescriptor};

/// Parameters derived for a fitted sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedSphereParams {
    /// `true` when the camera sees the outside of the sphere at the seed.
    pub is_convex: bool,
    /// Where the camera's view ray meets the sphere; `None` on a miss.
    pub hit_point: Option<Point3<f64>>,
    /// Camera-relative frame at the hit point; `None` on a miss.
    pub orientation: Option<AxisFrame>,
}

/// Returns `true` when the direction from `eye` to `seed` opposes the
/// direction from `reference` to `seed`.
///
/// Coincident points have no direction and count as not convex.
pub(crate) fn seen_from_outside(
    eye: &Point3<f64>,
    seed: &Point3<f64>,
    reference: &Point3<f64>,
) -> bool {
    let view = (seed - eye).try_normalize(0.0);
    let outward = (seed - reference).try_normalize(0.0);
    match (view, outward) {
        (Some(view), Some(outward)) => view.dot(&outward) < 0.0,
        _ => false,
    }
}

/// Derives convexity, the view-ray hit point and a camera-relative frame for
/// a sphere.
///
/// Of the two intersections of the view ray with the sphere, the one closer
/// to `seed` (the point the user originally picked) is used. At the hit point
/// the frame axes are:
///
/// - `front`: outward normal, `normalize(hit - center)`
/// - `right`: `normalize(camera_up × front)`
/// - `up`: `normalize(front × right)`
///
/// arranged according to `convention`.
///
/// # Example
///
/// ```
/// use surface_params::{derive_sphere, OrientationConvention, SphereDescriptor};
/// use scan_types::CameraPose;
/// use nalgebra::Point3;
///
/// let sphere = SphereDescriptor::new(Point3::new(0.0, 0.0, -5.0), 2.0);
/// let seed = Point3::new(0.0, 0.0, -3.0);
///
/// let derived = derive_sphere(
///     &sphere,
///     &CameraPose::default(),
///     &seed,
///     OrientationConvention::RoundingSurface,
/// );
/// assert!(derived.is_convex);
/// assert!((derived.hit_point.unwrap() - seed).norm() < 1e-12);
/// ```
#[must_use]
pub fn derive_sphere(
    sphere: &SphereDescriptor,
    camera: &CameraPose,
    seed: &Point3<f64>,
    convention: OrientationConvention,
) -> DerivedSphereParams {
    let is_convex = seen_from_outside(&camera.position, seed, &sphere.center);

    let look = camera.look_direction();
    let k = camera.position - sphere.center;
    let a = look.dot(&look);
    let b = k.dot(&look);
    let c = k.dot(&k) - sphere.radius * sphere.radius;

    let hit_point = nearest_root(&camera.position, &look, a, b, c, seed);
    let orientation =
        hit_point.and_then(|hit| sphere_frame(&hit, sphere, &camera.up(), convention));

    DerivedSphereParams {
        is_convex,
        hit_point,
        orientation,
    }
}

fn sphere_frame(
    hit: &Point3<f64>,
    sphere: &SphereDescriptor,
    camera_up: &Vector3<f64>,
    convention: OrientationConvention,
) -> Option<AxisFrame> {
    let front = (hit - sphere.center).try_normalize(f64::EPSILON)?;
    let right = camera_up.cross(&front).try_normalize(f64::EPSILON)?;
    let up = front.cross(&right).try_normalize(f64::EPSILON)?;
    Some(convention.frame(right, up, front))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere() -> SphereDescriptor {
        SphereDescriptor::new(Point3::new(0.0, 0.0, -5.0), 2.0)
    }

    #[test]
    fn test_front_hit_near_seed() {
        let seed = Point3::new(0.0, 0.0, -3.0);
        let derived = derive_sphere(
            &sphere(),
            &CameraPose::default(),
            &seed,
            OrientationConvention::RoundingSurface,
        );

        assert!(derived.is_convex);
        assert_relative_eq!(derived.hit_point.unwrap(), seed, epsilon = 1e-12);

        // front = +z, right = y × z = +x, up = z × x = +y
        let frame = derived.orientation.unwrap();
        assert_relative_eq!(frame.x, Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(frame.y, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(frame.z, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_far_seed_selects_back_intersection() {
        // A seed on the far side of the sphere (seen from inside a bowl).
        let seed = Point3::new(0.0, 0.0, -7.0);
        let derived = derive_sphere(
            &sphere(),
            &CameraPose::default(),
            &seed,
            OrientationConvention::RoundingSurface,
        );

        assert!(!derived.is_convex);
        assert_relative_eq!(derived.hit_point.unwrap(), seed, epsilon = 1e-12);
        let frame = derived.orientation.unwrap();
        assert_relative_eq!(frame.z, -Vector3::z(), epsilon = 1e-12);
        assert!(frame.is_orthonormal(1e-12));
    }

    #[test]
    fn test_on_surface_convention() {
        let seed = Point3::new(0.0, 0.0, -3.0);
        let derived = derive_sphere(
            &sphere(),
            &CameraPose::default(),
            &seed,
            OrientationConvention::OnSurface,
        );
        let frame = derived.orientation.unwrap();
        assert_relative_eq!(frame.x, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(frame.y, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(frame.z, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_tangent_ray_single_hit() {
        // The view ray touches the sphere at (0, 0, -5).
        let tangent = SphereDescriptor::new(Point3::new(2.0, 0.0, -5.0), 2.0);
        let derived = derive_sphere(
            &tangent,
            &CameraPose::default(),
            &Point3::new(0.5, 0.0, -5.0),
            OrientationConvention::RoundingSurface,
        );
        assert_relative_eq!(derived.hit_point.unwrap(), Point3::new(0.0, 0.0, -5.0));
        let frame = derived.orientation.unwrap();
        assert_relative_eq!(frame.z, -Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn test_miss_keeps_convexity() {
        let off_axis = SphereDescriptor::new(Point3::new(3.0, 0.0, -5.0), 1.0);
        let seed = Point3::new(2.0, 0.0, -5.0);
        let derived = derive_sphere(
            &off_axis,
            &CameraPose::default(),
            &seed,
            OrientationConvention::RoundingSurface,
        );
        assert!(derived.hit_point.is_none());
        assert!(derived.orientation.is_none());
        assert!(derived.is_convex);
    }

    #[test]
    fn test_camera_inside_sphere() {
        let around = SphereDescriptor::new(Point3::origin(), 10.0);
        let seed = Point3::new(0.0, 0.0, -10.0);
        let derived = derive_sphere(
            &around,
            &CameraPose::default(),
            &seed,
            OrientationConvention::RoundingSurface,
        );
        assert!(!derived.is_convex);
        assert_relative_eq!(derived.hit_point.unwrap(), seed, epsilon = 1e-12);
    }

    #[test]
    fn test_seed_equidistant_from_both_hits_takes_visible_side() {
        // Seed at the center is 2 from both z = -3 and z = -7.
        let derived = derive_sphere(
            &sphere(),
            &CameraPose::default(),
            &Point3::new(0.0, 0.0, -5.0),
            OrientationConvention::RoundingSurface,
        );
        assert_relative_eq!(
            derived.hit_point.unwrap(),
            Point3::new(0.0, 0.0, -3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_seed_at_center_is_not_convex() {
        assert!(!seen_from_outside(
            &Point3::origin(),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        ));
    }

    #[test]
    fn test_deterministic() {
        let camera = CameraPose::look_at(
            Point3::new(0.4, 0.3, 1.0),
            Point3::new(0.0, 0.0, -5.0),
            &Vector3::y(),
        );
        let seed = Point3::new(0.1, 0.2, -3.1);
        let convention = OrientationConvention::RoundingSurface;
        assert_eq!(
            derive_sphere(&sphere(), &camera, &seed, convention),
            derive_sphere(&sphere(), &camera, &seed, convention)
        );
    }
}
