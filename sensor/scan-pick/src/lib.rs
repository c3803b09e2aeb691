//! Ray-based point picking for depth point clouds.
//!
//! Given the camera's view ray and a dense point cloud, this crate selects
//! the single sample the user is pointing at, then derives the seed region
//! (seed index, seed point, seed radius) handed to a surface fitting engine.
//!
//! # Algorithm
//!
//! Picking behaves like a laser pointer with thickness. Every sample in
//! front of the ray origin is classified against a probe that widens with
//! depth (its radius is `probe_radius` per unit of distance along the ray):
//!
//! 1. Samples **inside** the probe compete on depth; the one closest to the
//!    camera along the view direction wins.
//! 2. If no sample falls inside, samples **outside** compete on angle; the
//!    one with the smallest angular deviation from the ray wins.
//!
//! Samples behind (or at) the ray origin are never picked.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. Picking is a
//! pure function over borrowed samples and is safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use scan_pick::{pick_point, PickTier};
//! use scan_types::{CloudSample, Ray};
//! use nalgebra::{Point3, Vector3};
//!
//! let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0));
//! let samples = [CloudSample::from_coords(0.0, 0.0, -5.0, 4.0)];
//!
//! let pick = pick_point(&ray, &samples, 1.0).unwrap();
//! assert_eq!(pick.index, 0);
//! assert_eq!(pick.tier, PickTier::Inside);
//! ```
//!
//! For validated picking at the system boundary use [`PickParams::pick`].
//!
//! # Features
//!
//! - `parallel` - Enables [`pick_point_parallel`] using rayon
//! - `serde` - Serialization for results and probe settings

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod params;
mod pick;
mod probe;
mod seed;

pub use error::{PickError, PickResult};
pub use params::PickParams;
#[cfg(feature = "parallel")]
pub use pick::pick_point_parallel;
pub use pick::{Pick, PickTier, pick_point};
pub use probe::{ProbeRadii, Viewport, ViewportProbe};
pub use seed::SeedRegion;
