//! Orthonormal frames built from three axes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};

/// Which local axis of a curved surface maps to which frame axis.
///
/// Sphere and cylinder frames are built from three camera-relative vectors:
/// `right` (tangent, across the view), `up` (tangent, or the cylinder axis)
/// and `front` (the outward surface normal at the hit point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrientationConvention {
    /// Content wraps around the surface: frame `(right, up, front)`.
    #[default]
    RoundingSurface,
    /// Content stands on the surface: frame `(up, front, right)`.
    OnSurface,
}

impl OrientationConvention {
    /// Arranges the three surface vectors into a frame.
    #[must_use]
    pub const fn frame(
        self,
        right: Vector3<f64>,
        up: Vector3<f64>,
        front: Vector3<f64>,
    ) -> AxisFrame {
        match self {
            Self::RoundingSurface => AxisFrame::from_axes(right, up, front),
            Self::OnSurface => AxisFrame::from_axes(up, front, right),
        }
    }
}

/// A frame given by its three axes in world coordinates.
///
/// The axes are the columns of the frame's rotation matrix. Frames produced
/// by the derivation functions are orthonormal and right-handed.
///
/// # Example
///
/// ```
/// use surface_params::AxisFrame;
/// use nalgebra::Vector3;
///
/// let frame = AxisFrame::from_axes(Vector3::y(), Vector3::z(), Vector3::x());
/// assert!(frame.is_orthonormal(1e-12));
///
/// let q = frame.to_quaternion();
/// let mapped = q * Vector3::x();
/// assert!((mapped - Vector3::y()).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisFrame {
    /// First axis.
    pub x: Vector3<f64>,
    /// Second axis.
    pub y: Vector3<f64>,
    /// Third axis.
    pub z: Vector3<f64>,
}

impl Default for AxisFrame {
    fn default() -> Self {
        Self::from_axes(Vector3::x(), Vector3::y(), Vector3::z())
    }
}

impl AxisFrame {
    /// Creates a frame from its axes. The axes are not checked.
    #[must_use]
    pub const fn from_axes(x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> Self {
        Self { x, y, z }
    }

    /// Returns the axes as matrix columns.
    #[must_use]
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x, self.y, self.z])
    }

    /// Returns the frame as a rotation.
    ///
    /// The frame must be orthonormal and right-handed.
    #[must_use]
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_matrix_unchecked(self.matrix())
    }

    /// Convert the frame to a rotation quaternion.
    ///
    /// The quaternion rotates the world X, Y and Z axes onto `x`, `y` and `z`.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(&self.rotation())
    }

    /// Returns the determinant of the axis matrix (`+1` for a right-handed
    /// orthonormal frame).
    #[must_use]
    pub fn handedness(&self) -> f64 {
        self.x.cross(&self.y).dot(&self.z)
    }

    /// Returns `true` if the axes are unit length, mutually perpendicular
    /// and right-handed within `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let units = [self.x, self.y, self.z]
            .iter()
            .all(|axis| (axis.norm() - 1.0).abs() <= tolerance);
        let perpendicular = self.x.dot(&self.y).abs() <= tolerance
            && self.y.dot(&self.z).abs() <= tolerance
            && self.z.dot(&self.x).abs() <= tolerance;
        units && perpendicular && (self.handedness() - 1.0).abs() <= tolerance
    }
}
