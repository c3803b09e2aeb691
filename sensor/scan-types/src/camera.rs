//! Camera poses.
//!
//! A [`CameraPose`] is the viewer's rigid transform, supplied fresh with
//! every query. Its rotation columns are the camera's right, up and
//! backward axes; the camera looks along the negated backward axis.

use nalgebra::{Isometry3, Point3, Rotation3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Ray;

/// The pose of the viewing camera in world space.
///
/// # Example
///
/// ```
/// use scan_types::CameraPose;
/// use nalgebra::{Point3, Vector3};
///
/// let camera = CameraPose::look_at(
///     Point3::new(0.0, 1.5, 0.0),
///     Point3::new(0.0, 1.5, -4.0),
///     &Vector3::y(),
/// );
///
/// assert!((camera.look_direction().z + 1.0).abs() < 1e-12);
/// assert!((camera.up().y - 1.0).abs() < 1e-12);
/// assert!((camera.right().x - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Point3<f64>,
    /// Camera orientation; columns are the right, up and backward axes.
    pub rotation: Rotation3<f64>,
}

impl CameraPose {
    /// Creates a pose from a position and rotation.
    #[must_use]
    pub const fn new(position: Point3<f64>, rotation: Rotation3<f64>) -> Self {
        Self { position, rotation }
    }

    /// Creates a pose from a camera-to-world isometry.
    #[must_use]
    pub fn from_isometry(isometry: &Isometry3<f64>) -> Self {
        Self {
            position: Point3::from(isometry.translation.vector),
            rotation: isometry.rotation.to_rotation_matrix(),
        }
    }

    /// Creates a pose at `eye` looking toward `target`.
    ///
    /// `up` is a hint; it must not be parallel to the viewing direction.
    #[must_use]
    pub fn look_at(eye: Point3<f64>, target: Point3<f64>, up: &Vector3<f64>) -> Self {
        // The backward axis points from the target to the eye.
        let backward = eye - target;
        Self {
            position: eye,
            rotation: Rotation3::face_towards(&backward, up),
        }
    }

    /// Returns the camera's right axis.
    #[must_use]
    pub fn right(&self) -> Vector3<f64> {
        self.rotation.matrix().column(0).into_owned()
    }

    /// Returns the camera's up axis.
    #[must_use]
    pub fn up(&self) -> Vector3<f64> {
        self.rotation.matrix().column(1).into_owned()
    }

    /// Returns the camera's backward axis (opposite of the view direction).
    #[must_use]
    pub fn backward(&self) -> Vector3<f64> {
        self.rotation.matrix().column(2).into_owned()
    }

    /// Returns the direction the camera looks along.
    #[must_use]
    pub fn look_direction(&self) -> Vector3<f64> {
        -self.backward()
    }

    /// Returns the camera orientation as a unit quaternion.
    #[must_use]
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(&self.rotation)
    }

    /// Returns the ray through the center of the view.
    #[must_use]
    pub fn view_ray(&self) -> Ray {
        Ray::new(self.position, self.look_direction())
    }

    /// Returns the pose as a camera-to-world isometry.
    #[must_use]
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(self.position.coords.into(), self.orientation())
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Point3::origin(), Rotation3::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_pose_looks_down_negative_z() {
        let camera = CameraPose::default();
        assert_relative_eq!(camera.look_direction(), -Vector3::z());
        assert_relative_eq!(camera.up(), Vector3::y());
        assert_relative_eq!(camera.right(), Vector3::x());
    }

    #[test]
    fn look_at_straight_down() {
        let camera = CameraPose::look_at(
            Point3::new(0.0, 5.0, 0.0),
            Point3::origin(),
            &Vector3::new(0.0, 0.0, -1.0),
        );
        assert_relative_eq!(camera.look_direction(), -Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(camera.right(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(camera.up(), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn axes_are_orthonormal() {
        let camera = CameraPose::look_at(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-2.0, 0.5, -1.0),
            &Vector3::y(),
        );
        let (r, u, b) = (camera.right(), camera.up(), camera.backward());
        assert_relative_eq!(r.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.dot(&u), 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.cross(&u), b, epsilon = 1e-12);
    }

    #[test]
    fn view_ray_starts_at_camera() {
        let camera = CameraPose::look_at(
            Point3::new(0.0, 1.0, 2.0),
            Point3::new(0.0, 1.0, -2.0),
            &Vector3::y(),
        );
        let ray = camera.view_ray();
        assert_eq!(ray.origin, camera.position);
        assert_relative_eq!(ray.direction, -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn isometry_round_trip() {
        let camera = CameraPose::look_at(
            Point3::new(0.5, 1.0, 2.0),
            Point3::new(-1.0, 0.0, 0.0),
            &Vector3::y(),
        );
        let back = CameraPose::from_isometry(&camera.to_isometry());
        assert_relative_eq!(back.position, camera.position, epsilon = 1e-12);
        assert_relative_eq!(back.look_direction(), camera.look_direction(), epsilon = 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn camera_pose_serialization() {
        let camera = CameraPose::default();
        let json = serde_json::to_string(&camera).ok();
        assert!(json.is_some());
    }
}
