//! Pick rays.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ray defined by an origin point and a direction vector.
///
/// Picking and intersection code assumes the direction has unit length.
/// Callers building rays from arbitrary vectors should go through
/// [`Ray::normalized`].
///
/// # Example
///
/// ```
/// use scan_types::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
/// let p = ray.point_at(2.0);
/// assert!((p.z + 2.0).abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// The origin of the ray.
    pub origin: Point3<f64>,
    /// The direction of the ray (unit length by contract).
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Creates a new ray with the given origin and direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point along the ray at parameter `t`.
    ///
    /// The point is computed as `origin + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    /// Returns the signed distance of `point` along the ray direction.
    ///
    /// Negative values lie behind the origin.
    #[must_use]
    pub fn depth_of(&self, point: &Point3<f64>) -> f64 {
        self.direction.dot(&(point - self.origin))
    }

    /// Returns a copy of this ray with a unit-length direction.
    ///
    /// Returns `None` if the direction is (numerically) zero.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let direction = self.direction.try_normalize(f64::EPSILON)?;
        Some(Self {
            origin: self.origin,
            direction,
        })
    }

    /// Checks whether the direction is unit length within `tolerance`.
    #[must_use]
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.direction.norm() - 1.0).abs() < tolerance
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point3::origin(), -Vector3::z())
    }
}
