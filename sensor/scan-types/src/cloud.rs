//! Point cloud samples produced by depth unprojection.
//!
//! Each sample carries a world-space position and the depth sensor's
//! confidence for that pixel. The confidence is an opaque fourth component
//! to the picking and derivation code; only [`PointCloud::filtered_by_confidence`]
//! interprets it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Point3;

use crate::{ScanError, ScanResult};

/// Number of components in a flat `(x, y, z, confidence)` sample.
const SAMPLE_STRIDE: usize = 4;

/// Depth reliability reported by the sensor for a sample.
///
/// Levels are ordered: `Low < Medium < High`.
///
/// # Example
///
/// ```
/// use scan_types::ConfidenceLevel;
///
/// assert!(ConfidenceLevel::High > ConfidenceLevel::Low);
/// assert_eq!(ConfidenceLevel::try_from(1_i64).ok(), Some(ConfidenceLevel::Medium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfidenceLevel {
    /// Any depth estimate, including unreliable ones.
    #[default]
    Low = 0,
    /// Moderately reliable depth.
    Medium = 1,
    /// Only the most reliable depth.
    High = 2,
}

impl ConfidenceLevel {
    /// Returns the raw integer code of this level.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for ConfidenceLevel {
    type Error = ScanError;

    fn try_from(code: i64) -> ScanResult<Self> {
        match code {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            other => Err(ScanError::UnknownConfidence(other)),
        }
    }
}

/// A single point cloud sample.
///
/// Components follow the `(x, y, z, confidence)` order of the buffers
/// written by depth unprojection. Those buffers are single precision; import
/// them with [`PointCloud::from_f32_samples`].
///
/// # Example
///
/// ```
/// use scan_types::CloudSample;
///
/// let sample = CloudSample::from_coords(1.0, 2.0, -3.0, 2.0);
/// assert!((sample.position.z + 3.0).abs() < 1e-12);
/// assert!((sample.confidence - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudSample {
    /// World-space position.
    pub position: Point3<f64>,
    /// Sensor confidence (or weight) for this sample.
    pub confidence: f64,
}

impl CloudSample {
    /// Creates a sample from a position and confidence.
    #[must_use]
    pub const fn new(position: Point3<f64>, confidence: f64) -> Self {
        Self {
            position,
            confidence,
        }
    }

    /// Creates a sample from raw coordinates.
    #[must_use]
    pub const fn from_coords(x: f64, y: f64, z: f64, confidence: f64) -> Self {
        Self::new(Point3::new(x, y, z), confidence)
    }

    /// Creates a sample from a packed `[x, y, z, confidence]` array.
    #[must_use]
    pub const fn from_array(packed: [f64; 4]) -> Self {
        Self::from_coords(packed[0], packed[1], packed[2], packed[3])
    }

    /// Returns the sample packed as `[x, y, z, confidence]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.confidence,
        ]
    }

    /// Checks whether the sample meets a confidence threshold.
    ///
    /// The confidence is truncated toward zero before comparison, matching
    /// the integer codes written by depth sensors.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn meets(&self, level: ConfidenceLevel) -> bool {
        (self.confidence as i64) >= level.code()
    }
}

/// An ordered point cloud.
///
/// Sample order is significant: pick results are indices into this
/// sequence, and filtering preserves relative order.
///
/// # Example
///
/// ```
/// use scan_types::{CloudSample, ConfidenceLevel, PointCloud};
///
/// let cloud = PointCloud::from_f32_samples(&[
///     [0.0, 0.0, -1.0, 0.0],
///     [0.0, 0.0, -2.0, 1.0],
///     [0.0, 0.0, -3.0, 2.0],
/// ]);
///
/// let medium = cloud.filtered_by_confidence(ConfidenceLevel::Medium);
/// assert_eq!(medium.len(), 2);
/// assert!((medium.samples()[0].position.z + 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloud {
    samples: Vec<CloudSample>,
}

impl PointCloud {
    /// Creates an empty point cloud.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Creates an empty point cloud with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Creates a point cloud that takes ownership of `samples`.
    #[must_use]
    pub const fn from_samples(samples: Vec<CloudSample>) -> Self {
        Self { samples }
    }

    /// Imports a single-precision `(x, y, z, confidence)` buffer.
    #[must_use]
    pub fn from_f32_samples(packed: &[[f32; 4]]) -> Self {
        packed
            .iter()
            .map(|s| CloudSample::from_array(s.map(f64::from)))
            .collect()
    }

    /// Imports a flat buffer of interleaved `x, y, z, confidence` values.
    ///
    /// # Errors
    ///
    /// - [`ScanError::RaggedBuffer`] if the buffer length is not a multiple
    ///   of four
    /// - [`ScanError::NonFinite`] if any position component is `NaN` or
    ///   infinite. The confidence component is not checked.
    pub fn from_flat(values: &[f64]) -> ScanResult<Self> {
        if values.len() % SAMPLE_STRIDE != 0 {
            return Err(ScanError::ragged(values.len(), SAMPLE_STRIDE));
        }
        values
            .chunks_exact(SAMPLE_STRIDE)
            .enumerate()
            .map(|(i, c)| {
                if c[..3].iter().all(|v| v.is_finite()) {
                    Ok(CloudSample::from_coords(c[0], c[1], c[2], c[3]))
                } else {
                    Err(ScanError::non_finite(format!("sample {i} position")))
                }
            })
            .collect()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the cloud has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples as a slice.
    #[must_use]
    pub fn samples(&self) -> &[CloudSample] {
        &self.samples
    }

    /// Returns the sample at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CloudSample> {
        self.samples.get(index)
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: CloudSample) {
        self.samples.push(sample);
    }

    /// Iterates over the samples in order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, CloudSample> {
        self.samples.iter()
    }

    /// Returns a new cloud holding only samples at or above `level`.
    ///
    /// Relative order is preserved, so indices into the result refer to the
    /// filtered cloud, not the original.
    #[must_use]
    pub fn filtered_by_confidence(&self, level: ConfidenceLevel) -> Self {
        self.samples
            .iter()
            .filter(|s| s.meets(level))
            .copied()
            .collect()
    }

    /// Consumes the cloud and returns the underlying samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<CloudSample> {
        self.samples
    }
}

impl FromIterator<CloudSample> for PointCloud {
    fn from_iter<I: IntoIterator<Item = CloudSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a CloudSample;
    type IntoIter = std::slice::Iter<'a, CloudSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl AsRef<[CloudSample]> for PointCloud {
    fn as_ref(&self) -> &[CloudSample] {
        &self.samples
    }
}
