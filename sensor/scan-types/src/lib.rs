//! Depth-scan data types for surface picking.
//!
//! This crate provides the value types shared by the picking and surface
//! derivation crates:
//!
//! - [`CloudSample`] - A world-space point with its depth confidence
//! - [`PointCloud`] - An ordered, owned sequence of samples
//! - [`ConfidenceLevel`] - Depth reliability threshold used to filter samples
//! - [`Ray`] - A pick ray (origin + unit direction)
//! - [`CameraPose`] - The viewer's rigid transform
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies** and no rendering
//! or capture code. The depth unprojection pipeline that fills a
//! [`PointCloud`] lives with the caller.
//!
//! # Coordinate Conventions
//!
//! Camera poses follow the right-handed view convention:
//! - X: right
//! - Y: up
//! - Z: backward (the camera looks along `-Z`)
//!
//! All coordinates are `f64` world-space values in meters.
//!
//! # Example
//!
//! ```
//! use scan_types::{CameraPose, CloudSample, ConfidenceLevel, PointCloud};
//! use nalgebra::{Point3, Vector3};
//!
//! let cloud = PointCloud::from_samples(vec![
//!     CloudSample::from_coords(0.0, 0.0, -2.0, 2.0),
//!     CloudSample::from_coords(0.0, 0.1, -2.0, 0.0),
//! ]);
//! let reliable = cloud.filtered_by_confidence(ConfidenceLevel::High);
//! assert_eq!(reliable.len(), 1);
//!
//! let camera = CameraPose::look_at(Point3::origin(), Point3::new(0.0, 0.0, -1.0), &Vector3::y());
//! let ray = camera.view_ray();
//! assert!((ray.direction.z + 1.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod camera;
mod cloud;
mod error;
mod ray;

// Re-export core types
pub use camera::CameraPose;
pub use cloud::{CloudSample, ConfidenceLevel, PointCloud};
pub use error::{ScanError, ScanResult};
pub use ray::Ray;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
