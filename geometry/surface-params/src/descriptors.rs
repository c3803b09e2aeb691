//! Fitted primitive descriptors.
//!
//! These are the shapes a surface fitting engine reports, expressed in the
//! same world frame as the point cloud and the camera pose.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Point3, Vector3};

use crate::{SurfaceError, SurfaceResult};

/// Smallest accepted edge length or axis length.
const MIN_EXTENT: f64 = 1e-9;

fn finite(point: &Point3<f64>) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}

/// The kind of primitive to search for or that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceKind {
    /// A bounded planar quadrilateral.
    Plane,
    /// A sphere.
    Sphere,
    /// A finite cylinder.
    Cylinder,
}

/// A bounded quadrilateral approximating a detected plane.
///
/// Corners are coplanar and consistently ordered so that
/// `upper_right - upper_left` and `lower_left - upper_left` span the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaneDescriptor {
    /// Lower-left corner.
    pub lower_left: Point3<f64>,
    /// Lower-right corner.
    pub lower_right: Point3<f64>,
    /// Upper-right corner.
    pub upper_right: Point3<f64>,
    /// Upper-left corner.
    pub upper_left: Point3<f64>,
}

impl PlaneDescriptor {
    /// Creates a plane from its corners without validation.
    #[must_use]
    pub const fn new(
        lower_left: Point3<f64>,
        lower_right: Point3<f64>,
        upper_right: Point3<f64>,
        upper_left: Point3<f64>,
    ) -> Self {
        Self {
            lower_left,
            lower_right,
            upper_right,
            upper_left,
        }
    }

    /// Creates a plane, checking that the corners span a plane.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NonFinite`] for NaN or infinite corners and
    /// [`SurfaceError::DegenerateCorners`] when the two edges from the
    /// upper-left corner are too short or parallel.
    pub fn try_new(
        lower_left: Point3<f64>,
        lower_right: Point3<f64>,
        upper_right: Point3<f64>,
        upper_left: Point3<f64>,
    ) -> SurfaceResult<Self> {
        let plane = Self::new(lower_left, lower_right, upper_right, upper_left);
        plane.validate()?;
        Ok(plane)
    }

    /// Checks the corners.
    ///
    /// # Errors
    ///
    /// See [`Self::try_new`].
    pub fn validate(&self) -> SurfaceResult<()> {
        if !self.corners().iter().all(finite) {
            return Err(SurfaceError::NonFinite("plane corner"));
        }

        let (across, down) = self.edges();
        if across.norm() < MIN_EXTENT || down.norm() < MIN_EXTENT {
            return Err(SurfaceError::degenerate_corners("zero-length edge"));
        }
        if across.cross(&down).norm() < MIN_EXTENT * across.norm() * down.norm() {
            return Err(SurfaceError::degenerate_corners("edges are parallel"));
        }
        Ok(())
    }

    /// Returns the corners in `[lower_left, lower_right, upper_right, upper_left]` order.
    #[must_use]
    pub const fn corners(&self) -> [Point3<f64>; 4] {
        [
            self.lower_left,
            self.lower_right,
            self.upper_right,
            self.upper_left,
        ]
    }

    /// Returns the average of the four corners.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        let sum = self.lower_left.coords
            + self.lower_right.coords
            + self.upper_right.coords
            + self.upper_left.coords;
        Point3::from(sum / 4.0)
    }

    /// Returns the edges `(upper_right - upper_left, lower_left - upper_left)`.
    #[must_use]
    pub fn edges(&self) -> (Vector3<f64>, Vector3<f64>) {
        (
            self.upper_right - self.upper_left,
            self.lower_left - self.upper_left,
        )
    }
}

/// A fitted sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereDescriptor {
    /// Center of the sphere.
    pub center: Point3<f64>,
    /// Radius of the sphere.
    pub radius: f64,
}

impl SphereDescriptor {
    /// Creates a sphere without validation.
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Creates a sphere, checking the center and radius.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NonFinite`] for a non-finite center and
    /// [`SurfaceError::InvalidRadius`] for a non-positive radius.
    pub fn try_new(center: Point3<f64>, radius: f64) -> SurfaceResult<Self> {
        let sphere = Self::new(center, radius);
        sphere.validate()?;
        Ok(sphere)
    }

    /// Checks the center and radius.
    ///
    /// # Errors
    ///
    /// See [`Self::try_new`].
    pub fn validate(&self) -> SurfaceResult<()> {
        if !finite(&self.center) {
            return Err(SurfaceError::NonFinite("sphere center"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SurfaceError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// A fitted finite cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CylinderDescriptor {
    /// Center of the top cap.
    pub top: Point3<f64>,
    /// Center of the bottom cap.
    pub bottom: Point3<f64>,
    /// Radius of the cylinder.
    pub radius: f64,
}

impl CylinderDescriptor {
    /// Creates a cylinder without validation.
    #[must_use]
    pub const fn new(top: Point3<f64>, bottom: Point3<f64>, radius: f64) -> Self {
        Self {
            top,
            bottom,
            radius,
        }
    }

    /// Creates a cylinder, checking the axis and radius.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NonFinite`], [`SurfaceError::DegenerateAxis`]
    /// when top and bottom coincide, or [`SurfaceError::InvalidRadius`].
    pub fn try_new(top: Point3<f64>, bottom: Point3<f64>, radius: f64) -> SurfaceResult<Self> {
        let cylinder = Self::new(top, bottom, radius);
        cylinder.validate()?;
        Ok(cylinder)
    }

    /// Checks the axis and radius.
    ///
    /// # Errors
    ///
    /// See [`Self::try_new`].
    pub fn validate(&self) -> SurfaceResult<()> {
        if !(finite(&self.top) && finite(&self.bottom)) {
            return Err(SurfaceError::NonFinite("cylinder cap"));
        }
        let distance = self.height();
        if distance < MIN_EXTENT {
            return Err(SurfaceError::DegenerateAxis { distance });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SurfaceError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    /// Returns the distance between the caps.
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).norm()
    }

    /// Returns the unit axis from bottom to top.
    ///
    /// Non-finite when top and bottom coincide.
    #[must_use]
    pub fn axis(&self) -> Vector3<f64> {
        (self.top - self.bottom).normalize()
    }
}

/// A primitive reported by a fitting engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FittedSurface {
    /// A plane.
    Plane(PlaneDescriptor),
    /// A sphere.
    Sphere(SphereDescriptor),
    /// A cylinder.
    Cylinder(CylinderDescriptor),
}

impl FittedSurface {
    /// Returns the kind of this surface.
    #[must_use]
    pub const fn kind(&self) -> SurfaceKind {
        match self {
            Self::Plane(_) => SurfaceKind::Plane,
            Self::Sphere(_) => SurfaceKind::Sphere,
            Self::Cylinder(_) => SurfaceKind::Cylinder,
        }
    }

    /// Validates the wrapped descriptor.
    ///
    /// # Errors
    ///
    /// Returns the descriptor's validation error.
    pub fn validate(&self) -> SurfaceResult<()> {
        match self {
            Self::Plane(plane) => plane.validate(),
            Self::Sphere(sphere) => sphere.validate(),
            Self::Cylinder(cylinder) => cylinder.validate(),
        }
    }
}

impl From<PlaneDescriptor> for FittedSurface {
    fn from(plane: PlaneDescriptor) -> Self {
        Self::Plane(plane)
    }
}

impl From<SphereDescriptor> for FittedSurface {
    fn from(sphere: SphereDescriptor) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<CylinderDescriptor> for FittedSurface {
    fn from(cylinder: CylinderDescriptor) -> Self {
        Self::Cylinder(cylinder)
    }
}
