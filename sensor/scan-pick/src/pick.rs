//! Two-tier point picking along a view ray.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use scan_types::{CloudSample, Ray};
use tracing::debug;

/// Which classification tier produced a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PickTier {
    /// The sample lies inside the probe; it is the closest such sample.
    Inside,
    /// No sample lies inside the probe; this is the angularly closest one.
    Outside,
}

/// The sample selected by [`pick_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pick {
    /// Index of the sample in the slice that was searched.
    pub index: usize,
    /// Tier that selected the sample.
    pub tier: PickTier,
    /// Signed distance of the sample along the ray direction (always positive).
    pub depth: f64,
}

/// Running best candidates for both tiers.
#[derive(Debug, Clone, Copy)]
struct Candidates {
    /// `probe_radius² + 1`, the squared-length bound per unit depth².
    bound: f64,
    inside: Option<usize>,
    min_depth: f64,
    outside: Option<usize>,
    outside_depth: f64,
    max_cosine: f64,
}

impl Candidates {
    fn new(probe_radius: f64) -> Self {
        Self {
            bound: probe_radius.mul_add(probe_radius, 1.0),
            inside: None,
            min_depth: f64::MAX,
            outside: None,
            outside_depth: 0.0,
            max_cosine: -f64::MAX,
        }
    }

    /// Classifies one sample. Ties keep the earlier candidate.
    fn consider(&mut self, index: usize, ray: &Ray, sample: &CloudSample) {
        let offset = sample.position - ray.origin;
        let depth = ray.direction.dot(&offset);

        if depth < f64::EPSILON {
            return;
        }

        // |offset|² < (r² + 1)·depth²  ⇔  perpendicular distance < r·depth
        if offset.norm_squared() < self.bound * (depth * depth) {
            if depth < self.min_depth {
                self.min_depth = depth;
                self.inside = Some(index);
            }
        } else {
            let cosine = depth / offset.norm();
            if cosine > self.max_cosine {
                self.max_cosine = cosine;
                self.outside_depth = depth;
                self.outside = Some(index);
            }
        }
    }

    /// Combines candidates from two disjoint index ranges.
    ///
    /// Equal scores resolve to the lower index so the result matches a
    /// sequential scan.
    #[cfg(feature = "parallel")]
    #[allow(clippy::float_cmp)]
    fn merge(self, other: Self) -> Self {
        let mut merged = self;

        if let Some(index) = other.inside {
            let better = other.min_depth < merged.min_depth
                || (other.min_depth == merged.min_depth && merged.inside.is_none_or(|i| index < i));
            if better {
                merged.min_depth = other.min_depth;
                merged.inside = Some(index);
            }
        }

        if let Some(index) = other.outside {
            let better = other.max_cosine > merged.max_cosine
                || (other.max_cosine == merged.max_cosine
                    && merged.outside.is_none_or(|i| index < i));
            if better {
                merged.max_cosine = other.max_cosine;
                merged.outside_depth = other.outside_depth;
                merged.outside = Some(index);
            }
        }

        merged
    }

    fn finish(self) -> Option<Pick> {
        if let Some(index) = self.inside {
            return Some(Pick {
                index,
                tier: PickTier::Inside,
                depth: self.min_depth,
            });
        }
        self.outside.map(|index| Pick {
            index,
            tier: PickTier::Outside,
            depth: self.outside_depth,
        })
    }
}

/// Picks the sample the ray points at.
///
/// # Arguments
///
/// * `ray` - The pick ray; its direction must be unit length
/// * `samples` - Point cloud samples; the confidence component is ignored
/// * `probe_radius` - Probe radius per unit of depth; must be positive
///
/// # Returns
///
/// The closest sample inside the probe if any exists, otherwise the sample
/// with the smallest angle to the ray, otherwise `None` (empty cloud or
/// every sample behind the ray origin).
///
/// The inside test `|p - o|² < (r² + 1)·d²` (with `d` the depth along the
/// ray) avoids a square root per sample.
///
/// # Example
///
/// ```
/// use scan_pick::{pick_point, PickTier};
/// use scan_types::{CloudSample, Ray};
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0));
/// let samples = [
///     CloudSample::from_coords(0.0, 0.0, -8.0, 2.0), // inside, far
///     CloudSample::from_coords(0.0, 0.1, -4.0, 2.0), // inside, near
///     CloudSample::from_coords(3.0, 0.0, -2.0, 2.0), // outside
/// ];
///
/// let pick = pick_point(&ray, &samples, 0.1).unwrap();
/// assert_eq!(pick.index, 1);
/// assert_eq!(pick.tier, PickTier::Inside);
/// ```
#[must_use]
pub fn pick_point(ray: &Ray, samples: &[CloudSample], probe_radius: f64) -> Option<Pick> {
    let mut candidates = Candidates::new(probe_radius);
    for (index, sample) in samples.iter().enumerate() {
        candidates.consider(index, ray, sample);
    }

    let pick = candidates.finish();
    debug!(
        samples = samples.len(),
        probe_radius,
        index = ?pick.map(|p| p.index),
        tier = ?pick.map(|p| p.tier),
        "Point pick finished"
    );
    pick
}

/// Picks the sample the ray points at, scanning the cloud in parallel.
///
/// Produces exactly the same result as [`pick_point`], including tie
/// breaking toward the lowest index.
#[cfg(feature = "parallel")]
#[must_use]
pub fn pick_point_parallel(ray: &Ray, samples: &[CloudSample], probe_radius: f64) -> Option<Pick> {
    use rayon::prelude::*;

    let pick = samples
        .par_iter()
        .enumerate()
        .fold(
            || Candidates::new(probe_radius),
            |mut candidates, (index, sample)| {
                candidates.consider(index, ray, sample);
                candidates
            },
        )
        .reduce(|| Candidates::new(probe_radius), Candidates::merge)
        .finish();

    debug!(
        samples = samples.len(),
        probe_radius,
        index = ?pick.map(|p| p.index),
        "Parallel point pick finished"
    );
    pick
}
