//! Camera-facing normal and view-ray hit point for a fitted plane.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Point3, Vector3};
use scan_types::CameraPose;

use crate::PlaneDescriptor;

/// Below this `|cos|` between the plane normal and the view direction the
/// view ray grazes the plane and no hit point is computed.
pub const GRAZING_THRESHOLD: f64 = 0.1;

/// Parameters derived for a fitted plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedPlaneParams {
    /// Unit plane normal, oriented toward the camera.
    pub normal: Vector3<f64>,
    /// Average of the plane's corners.
    pub center: Point3<f64>,
    /// Where the camera's view ray meets the plane; `None` when the plane is
    /// nearly edge-on to the view direction.
    pub hit_point: Option<Point3<f64>>,
}

/// Derives the camera-facing normal and view-ray hit point of a plane.
///
/// The plane basis is built from the corners: `x` along
/// `upper_right - upper_left`, `z` along `lower_left - upper_left`, and the
/// candidate normal `y = z × x`. The normal is flipped so it points back
/// toward the camera. When `|y · look| < GRAZING_THRESHOLD` the view ray
/// would graze the plane and the hit point is omitted.
///
/// The corners must span a plane (see [`PlaneDescriptor::validate`]).
///
/// # Example
///
/// ```
/// use surface_params::{derive_plane, PlaneDescriptor};
/// use scan_types::CameraPose;
/// use nalgebra::{Point3, Vector3};
///
/// // Unit square on the floor, camera 5 units above looking straight down.
/// let plane = PlaneDescriptor::new(
///     Point3::new(-0.5, 0.0, 0.5),
///     Point3::new(0.5, 0.0, 0.5),
///     Point3::new(0.5, 0.0, -0.5),
///     Point3::new(-0.5, 0.0, -0.5),
/// );
/// let camera = CameraPose::look_at(Point3::new(0.0, 5.0, 0.0), Point3::origin(), &-Vector3::z());
///
/// let derived = derive_plane(&plane, &camera);
/// assert!((derived.normal - Vector3::y()).norm() < 1e-12);
/// assert!(derived.hit_point.unwrap().coords.norm() < 1e-12);
/// ```
#[must_use]
pub fn derive_plane(plane: &PlaneDescriptor, camera: &CameraPose) -> DerivedPlaneParams {
    let (across, down) = plane.edges();
    let x_axis = across.normalize();
    let z_axis = down.normalize();
    let y_axis = z_axis.cross(&x_axis).normalize();

    let center = plane.center();
    let look = camera.look_direction();
    let det = y_axis.dot(&look);
    let normal = if det < 0.0 { y_axis } else { -y_axis };

    let hit_point = if det.abs() < GRAZING_THRESHOLD {
        None
    } else {
        let t = (center - camera.position).dot(&normal) / look.dot(&normal);
        Some(camera.position + look * t)
    };

    DerivedPlaneParams {
        normal,
        center,
        hit_point,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit square centered at the origin with candidate normal `+y`.
    fn floor() -> PlaneDescriptor {
        PlaneDescriptor::new(
            Point3::new(-0.5, 0.0, 0.5),
            Point3::new(0.5, 0.0, 0.5),
            Point3::new(0.5, 0.0, -0.5),
            Point3::new(-0.5, 0.0, -0.5),
        )
    }

    #[test]
    fn test_camera_above_looking_down() {
        let camera =
            CameraPose::look_at(Point3::new(0.0, 5.0, 0.0), Point3::origin(), &-Vector3::z());
        let derived = derive_plane(&floor(), &camera);

        // The normal faces the camera, which is above the plane.
        assert_relative_eq!(derived.normal, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(derived.center, Point3::origin());
        assert_relative_eq!(derived.hit_point.unwrap(), Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn test_camera_below_flips_normal() {
        let camera =
            CameraPose::look_at(Point3::new(0.0, -3.0, 0.0), Point3::origin(), &Vector3::z());
        let derived = derive_plane(&floor(), &camera);
        assert_relative_eq!(derived.normal, -Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(derived.hit_point.unwrap(), Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn test_oblique_view_hits_off_center() {
        // Looking down at 45 degrees from (0, 2, 2) toward (0, 0, 0).
        let camera =
            CameraPose::look_at(Point3::new(0.0, 2.0, 2.0), Point3::origin(), &Vector3::y());
        let derived = derive_plane(&floor(), &camera);
        assert_relative_eq!(derived.normal, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(derived.hit_point.unwrap(), Point3::origin(), epsilon = 1e-12);

        // Same direction, shifted sideways: the hit moves with the camera.
        let camera =
            CameraPose::look_at(Point3::new(1.0, 2.0, 2.0), Point3::new(1.0, 0.0, 0.0), &Vector3::y());
        let derived = derive_plane(&floor(), &camera);
        assert_relative_eq!(
            derived.hit_point.unwrap(),
            Point3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_grazing_view_has_no_hit() {
        // Looking almost parallel to the floor: |det| ≈ 0.05.
        let target = Point3::new(0.0, 0.0, -20.0);
        let eye = Point3::new(0.0, 1.0, 0.0);
        let camera = CameraPose::look_at(eye, target, &Vector3::y());
        let derived = derive_plane(&floor(), &camera);
        assert!(derived.hit_point.is_none());
        // The normal is still oriented toward the camera.
        assert_relative_eq!(derived.normal, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_edge_on_view_has_no_hit() {
        let camera = CameraPose::look_at(
            Point3::new(0.0, 0.0, 5.0),
            Point3::origin(),
            &Vector3::y(),
        );
        assert!(derive_plane(&floor(), &camera).hit_point.is_none());
    }

    #[test]
    fn test_wall_facing_camera() {
        // Vertical wall at z = -4 spanning x and y.
        let wall = PlaneDescriptor::new(
            Point3::new(-1.0, -1.0, -4.0),
            Point3::new(1.0, -1.0, -4.0),
            Point3::new(1.0, 1.0, -4.0),
            Point3::new(-1.0, 1.0, -4.0),
        );
        let camera = CameraPose::default();
        let derived = derive_plane(&wall, &camera);
        assert_relative_eq!(derived.normal, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(
            derived.hit_point.unwrap(),
            Point3::new(0.0, 0.0, -4.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deterministic() {
        let camera = CameraPose::look_at(
            Point3::new(0.3, 2.0, 1.7),
            Point3::new(0.1, 0.0, 0.2),
            &Vector3::y(),
        );
        assert_eq!(derive_plane(&floor(), &camera), derive_plane(&floor(), &camera));
    }
}
