//! Axis, convexity, hit point and orientation for a fitted cylinder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Point3, Vector3};
use scan_types::CameraPose;

use crate::intersect::nearest_root;
use crate::sphere::seen_from_outside;
use crate::{AxisFrame, CylinderDescriptor, OrientationConvention};

/// Parameters derived for a fitted cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedCylinderParams {
    /// Unit axis, oriented to agree with the camera's up direction.
    pub axis: Vector3<f64>,
    /// `true` when the camera sees the outside of the cylinder at the seed.
    pub is_convex: bool,
    /// Where the camera's view ray meets the (infinite) cylinder; `None` on a
    /// miss or when the view ray runs along the axis.
    pub hit_point: Option<Point3<f64>>,
    /// Projection of the hit point onto the axis line.
    pub axis_point: Option<Point3<f64>>,
    /// Camera-relative frame at the hit point.
    pub orientation: Option<AxisFrame>,
}

/// Derives the axis, convexity, view-ray hit point and a camera-relative
/// frame for a cylinder.
///
/// The axis runs from `bottom` to `top` and is negated when it points away
/// from the camera's up vector. The view ray is intersected with the
/// infinite cylinder by removing the axial component of the ray; of the two
/// roots the one closer to `seed` is used. At the hit point:
///
/// - `front`: `normalize(hit - axis_point)`, the outward radial direction
/// - `right`: `normalize(axis × front)`
///
/// and the frame `(right, axis, front)` is arranged according to
/// `convention`.
///
/// # Example
///
/// ```
/// use surface_params::{derive_cylinder, CylinderDescriptor, OrientationConvention};
/// use scan_types::CameraPose;
/// use nalgebra::Point3;
///
/// let cylinder = CylinderDescriptor::new(
///     Point3::new(0.0, 1.0, -5.0),
///     Point3::new(0.0, -1.0, -5.0),
///     1.0,
/// );
/// let derived = derive_cylinder(
///     &cylinder,
///     &CameraPose::default(),
///     &Point3::new(0.0, 0.0, -4.0),
///     OrientationConvention::RoundingSurface,
/// );
///
/// assert!(derived.is_convex);
/// let axis_point = derived.axis_point.unwrap();
/// assert!((axis_point - Point3::new(0.0, 0.0, -5.0)).norm() < 1e-12);
/// ```
#[must_use]
pub fn derive_cylinder(
    cylinder: &CylinderDescriptor,
    camera: &CameraPose,
    seed: &Point3<f64>,
    convention: OrientationConvention,
) -> DerivedCylinderParams {
    let up = camera.up();
    let axis = cylinder.axis();
    let axis = if axis.dot(&up) < 0.0 { -axis } else { axis };

    let is_convex = seen_from_outside(&camera.position, seed, &cylinder.bottom);

    let look = camera.look_direction();
    let tmp = camera.position - cylinder.bottom;
    let dn = look.dot(&axis);
    let tn = tmp.dot(&axis);
    let a = look.dot(&look) - dn * dn;
    let b = tmp.dot(&look) - tn * dn;
    let c = tmp.dot(&tmp) - tn * tn - cylinder.radius * cylinder.radius;

    let hit_point = nearest_root(&camera.position, &look, a, b, c, seed);
    let axis_point = hit_point.map(|hit| cylinder.bottom + axis * (hit - cylinder.bottom).dot(&axis));

    let orientation = match (hit_point, axis_point) {
        (Some(hit), Some(on_axis)) => cylinder_frame(&hit, &on_axis, &axis, convention),
        _ => None,
    };

    DerivedCylinderParams {
        axis,
        is_convex,
        hit_point,
        axis_point,
        orientation,
    }
}

fn cylinder_frame(
    hit: &Point3<f64>,
    axis_point: &Point3<f64>,
    axis: &Vector3<f64>,
    convention: OrientationConvention,
) -> Option<AxisFrame> {
    let front = (hit - axis_point).try_normalize(f64::EPSILON)?;
    let right = axis.cross(&front).try_normalize(f64::EPSILON)?;
    Some(convention.frame(right, *axis, front))
}
