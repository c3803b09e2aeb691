//! Seeded surface fitting and content placement for scanned scenes.
//!
//! This crate ties the picking and derivation crates together around an
//! external surface fitting engine:
//!
//! ```text
//! PointCloud ─► confidence filter ─► pick on view ray ─► SeedRegion
//!     ─► SurfaceFitter ─► FittedSurface ─► derive_* ─► anchor_* ─► Anchor
//! ```
//!
//! The engine is reached through the [`SurfaceFitter`] trait, so any fitting
//! library (or a test double) can be plugged in.
//!
//! # Placement
//!
//! - Planes are classified against the world up direction as walls, floors,
//!   ceilings or slopes, and content sits at the view-ray hit point.
//! - Spheres and cylinders only accept content when the camera sees their
//!   outside. Content is centered on the sphere, or on the cylinder axis at
//!   the hit height, and scaled by the radius.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It does not
//! capture depth, run the fitting engine or render; it only computes where
//! content goes.
//!
//! # Example
//!
//! ```
//! use surface_anchor::{anchor_surface, AnchorConfig, AnchorKind, FitRequest, SurfaceFitter};
//! use surface_params::{FittedSurface, PlaneDescriptor, SurfaceKind};
//! use scan_pick::ProbeRadii;
//! use scan_types::{CameraPose, CloudSample, PointCloud};
//! use nalgebra::Point3;
//!
//! /// Reports a wall at z = -2 for every request.
//! struct WallFitter;
//!
//! impl SurfaceFitter for WallFitter {
//!     type Error = std::convert::Infallible;
//!
//!     fn find_surface(
//!         &mut self,
//!         _request: &FitRequest<'_>,
//!     ) -> Result<Option<FittedSurface>, Self::Error> {
//!         Ok(Some(FittedSurface::Plane(PlaneDescriptor::new(
//!             Point3::new(-1.0, -1.0, -2.0),
//!             Point3::new(1.0, -1.0, -2.0),
//!             Point3::new(1.0, 1.0, -2.0),
//!             Point3::new(-1.0, 1.0, -2.0),
//!         ))))
//!     }
//! }
//!
//! let cloud: PointCloud = (0..5)
//!     .map(|i| CloudSample::from_coords(f64::from(i) * 0.1, 0.0, -2.0, 2.0))
//!     .collect();
//! let radii = ProbeRadii::new(0.1, 0.02).unwrap();
//!
//! let anchored = anchor_surface(
//!     &cloud,
//!     &CameraPose::default(),
//!     &radii,
//!     SurfaceKind::Plane,
//!     &mut WallFitter,
//!     &AnchorConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(anchored.anchor.kind, AnchorKind::Wall);
//! assert_eq!(anchored.seed.index, 0);
//! ```
//!
//! # Features
//!
//! - `serde` - Serialization for configuration, anchors and results

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod fitter;
mod pipeline;
mod placement;

pub use config::AnchorConfig;
pub use error::{AnchorError, AnchorResult};
pub use fitter::{FitRequest, SurfaceFitter};
pub use pipeline::{AnchoredSurface, anchor_surface};
pub use placement::{
    Anchor, AnchorKind, AnchorPose, Unplaceable, anchor_cylinder, anchor_plane, anchor_sphere,
};
