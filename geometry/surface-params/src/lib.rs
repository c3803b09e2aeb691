//! Camera-relative parameters for fitted planes, spheres and cylinders.
//!
//! A surface fitting engine reports primitives as bare geometry: four plane
//! corners, a sphere center and radius, or a cylinder's cap centers and
//! radius. To place content on such a surface, this crate derives what the
//! viewer sees:
//!
//! - [`derive_plane`] - Camera-facing normal and the view-ray hit point
//! - [`derive_sphere`] - Convexity, hit point and a camera-relative frame
//! - [`derive_cylinder`] - Camera-aligned axis, convexity, hit point, axis
//!   point and a camera-relative frame
//!
//! # Degenerate Geometry
//!
//! Derivation never fails. When the view ray grazes a plane, misses a sphere
//! or cylinder, or runs along a cylinder's axis, the hit point (and
//! everything computed from it) is `None`, while the normal, axis and
//! convexity are still reported. Descriptors should be checked once with
//! their `validate` / `try_new` methods where they enter the system.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. All functions
//! are pure and allocation-free.
//!
//! # Example
//!
//! ```
//! use surface_params::{derive_sphere, OrientationConvention, SphereDescriptor};
//! use scan_types::CameraPose;
//! use nalgebra::{Point3, Vector3};
//!
//! let sphere = SphereDescriptor::try_new(Point3::new(0.0, 0.0, -5.0), 2.0).unwrap();
//! let camera = CameraPose::look_at(Point3::origin(), Point3::new(0.0, 0.0, -1.0), &Vector3::y());
//!
//! let derived = derive_sphere(
//!     &sphere,
//!     &camera,
//!     &Point3::new(0.0, 0.0, -3.0),
//!     OrientationConvention::RoundingSurface,
//! );
//!
//! let frame = derived.orientation.unwrap();
//! assert!(frame.is_orthonormal(1e-12));
//! ```
//!
//! # Features
//!
//! - `serde` - Serialization for descriptors and derived parameters

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cylinder;
mod descriptors;
mod error;
mod frame;
mod intersect;
mod plane;
mod sphere;

pub use cylinder::{DerivedCylinderParams, derive_cylinder};
pub use descriptors::{
    CylinderDescriptor, FittedSurface, PlaneDescriptor, SphereDescriptor, SurfaceKind,
};
pub use error::{SurfaceError, SurfaceResult};
pub use frame::{AxisFrame, OrientationConvention};
pub use plane::{DerivedPlaneParams, GRAZING_THRESHOLD, derive_plane};
pub use sphere::{DerivedSphereParams, derive_sphere};
