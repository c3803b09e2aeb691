//! Placement of content on fitted surfaces.
//!
//! Planes are classified against the world up direction into walls, floors,
//! ceilings and slopes, each with its own frame. Spheres and cylinders take
//! their frame from the derived parameters and are only placeable when the
//! camera sees their outside.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Point3, UnitQuaternion, Vector3};
use scan_types::CameraPose;
use surface_params::{
    AxisFrame, CylinderDescriptor, DerivedCylinderParams, DerivedPlaneParams,
    DerivedSphereParams, SphereDescriptor,
};
use thiserror::Error;

use crate::AnchorConfig;

/// Classification of an anchored surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnchorKind {
    /// A vertical plane.
    Wall,
    /// A horizontal plane facing up.
    Floor,
    /// A horizontal plane facing down.
    Ceiling,
    /// A tilted plane facing up.
    FloorSlope,
    /// A tilted plane facing down.
    CeilingSlope,
    /// A sphere.
    Sphere,
    /// A cylinder.
    Cylinder,
}

impl AnchorKind {
    /// Returns `true` for the plane classifications.
    #[must_use]
    pub const fn is_planar(self) -> bool {
        matches!(
            self,
            Self::Wall | Self::Floor | Self::Ceiling | Self::FloorSlope | Self::CeilingSlope
        )
    }
}

/// World-space placement of content.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorPose {
    /// Content origin.
    pub position: Point3<f64>,
    /// Content orientation.
    pub orientation: UnitQuaternion<f64>,
    /// Uniform scale (the primitive's radius for spheres and cylinders).
    pub scale: f64,
}

/// A placed anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// Surface classification.
    pub kind: AnchorKind,
    /// Placement pose.
    pub pose: AnchorPose,
}

/// Why content cannot be placed on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unplaceable {
    /// The view ray does not meet the surface.
    #[error("the view ray does not meet the surface")]
    NoHitPoint,
    /// The camera sees the inside of a curved surface.
    #[error("the surface is concave from the camera")]
    Concave,
    /// No frame could be built at the hit point.
    #[error("no orientation frame at the hit point")]
    NoFrame,
}

fn unit(v: Vector3<f64>) -> Option<Vector3<f64>> {
    v.try_normalize(f64::EPSILON)
}

/// Anchors content to a plane.
///
/// With `det = up · normal`:
///
/// - `|det| < wall_threshold`: [`AnchorKind::Wall`], frame
///   `(up × normal, up, right × up)`
/// - `|det| > level_threshold`: [`AnchorKind::Floor`] (or `Ceiling` when
///   `det < 0`), frame `(up × backward, up, right × up)` so content faces
///   the camera
/// - otherwise [`AnchorKind::FloorSlope`] (or `CeilingSlope`), with the
///   normal `n'` turned upward: frame `(n' × up, n', right × n')`
///
/// The content sits at the plane's hit point with unit scale.
///
/// # Errors
///
/// Returns [`Unplaceable::NoHitPoint`] when the plane was seen edge-on, or
/// [`Unplaceable::NoFrame`] if a frame axis degenerates.
pub fn anchor_plane(
    derived: &DerivedPlaneParams,
    camera: &CameraPose,
    config: &AnchorConfig,
) -> Result<Anchor, Unplaceable> {
    let position = derived.hit_point.ok_or(Unplaceable::NoHitPoint)?;
    let up = config.world_up;
    let normal = derived.normal;
    let det = up.dot(&normal);

    let (kind, frame) = if det.abs() < config.wall_threshold {
        let right = unit(up.cross(&normal)).ok_or(Unplaceable::NoFrame)?;
        let front = unit(right.cross(&up)).ok_or(Unplaceable::NoFrame)?;
        (AnchorKind::Wall, AxisFrame::from_axes(right, up, front))
    } else if det.abs() > config.level_threshold {
        let kind = if det > 0.0 {
            AnchorKind::Floor
        } else {
            AnchorKind::Ceiling
        };
        // Looking straight down or up leaves no horizontal backward
        // component; use the camera's right instead.
        let right = unit(up.cross(&camera.backward()))
            .or_else(|| {
                let right = camera.right();
                unit(right - up * right.dot(&up))
            })
            .ok_or(Unplaceable::NoFrame)?;
        let front = unit(right.cross(&up)).ok_or(Unplaceable::NoFrame)?;
        (kind, AxisFrame::from_axes(right, up, front))
    } else {
        let (kind, facing) = if det > 0.0 {
            (AnchorKind::FloorSlope, normal)
        } else {
            (AnchorKind::CeilingSlope, -normal)
        };
        let right = unit(facing.cross(&up)).ok_or(Unplaceable::NoFrame)?;
        let front = unit(right.cross(&facing)).ok_or(Unplaceable::NoFrame)?;
        (kind, AxisFrame::from_axes(right, facing, front))
    };

    Ok(Anchor {
        kind,
        pose: AnchorPose {
            position,
            orientation: frame.to_quaternion(),
            scale: 1.0,
        },
    })
}

/// Anchors content to a sphere.
///
/// The content is centered on the sphere and scaled by its radius. It takes
/// the derived frame's orientation, or the camera's when the view ray missed
/// the sphere.
///
/// # Errors
///
/// Returns [`Unplaceable::Concave`] when the camera sees the sphere's inside.
pub fn anchor_sphere(
    sphere: &SphereDescriptor,
    derived: &DerivedSphereParams,
    camera: &CameraPose,
) -> Result<Anchor, Unplaceable> {
    if !derived.is_convex {
        return Err(Unplaceable::Concave);
    }

    let orientation = derived
        .orientation
        .as_ref()
        .map_or_else(|| camera.orientation(), AxisFrame::to_quaternion);

    Ok(Anchor {
        kind: AnchorKind::Sphere,
        pose: AnchorPose {
            position: sphere.center,
            orientation,
            scale: sphere.radius,
        },
    })
}

/// Anchors content to a cylinder.
///
/// The content sits on the axis at the height of the hit point, scaled by
/// the radius and oriented by the derived frame.
///
/// # Errors
///
/// Returns [`Unplaceable::Concave`] when the camera sees the cylinder's
/// inside, [`Unplaceable::NoHitPoint`] when the view ray missed it, or
/// [`Unplaceable::NoFrame`] when no frame was derived.
pub fn anchor_cylinder(
    cylinder: &CylinderDescriptor,
    derived: &DerivedCylinderParams,
) -> Result<Anchor, Unplaceable> {
    if !derived.is_convex {
        return Err(Unplaceable::Concave);
    }
    if derived.hit_point.is_none() {
        return Err(Unplaceable::NoHitPoint);
    }
    let position = derived.axis_point.ok_or(Unplaceable::NoHitPoint)?;
    let frame = derived.orientation.ok_or(Unplaceable::NoFrame)?;

    Ok(Anchor {
        kind: AnchorKind::Cylinder,
        pose: AnchorPose {
            position,
            orientation: frame.to_quaternion(),
            scale: cylinder.radius,
        },
    })
}
