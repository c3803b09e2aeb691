//! Screen-space probe settings and their view-space radii.
//!
//! The user sizes two on-screen circles: a *touch* circle that bounds the
//! region handed to the fitting engine, and a smaller *probe* circle used
//! for picking. Both are converted here into radii per unit of depth, which
//! is the form [`pick_point`](crate::pick_point) and
//! [`SeedRegion`](crate::SeedRegion) consume.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Matrix4;

use crate::{PickError, PickResult};

/// Smallest touch circle radius in pixels.
pub const MIN_TOUCH_RADIUS_PX: f64 = 32.0;

/// Smallest probe circle radius in pixels.
pub const MIN_PROBE_RADIUS_PX: f64 = 2.5;

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the largest circle radius that fits the viewport.
    #[must_use]
    pub fn max_view_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Returns `true` when the viewport is taller than it is wide.
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// Checks that the viewport has a positive area.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::InvalidViewport`] for empty or non-finite sizes.
    pub fn validate(&self) -> PickResult<()> {
        let valid = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if valid {
            Ok(())
        } else {
            Err(PickError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// On-screen probe circles, in pixels.
///
/// # Example
///
/// ```
/// use scan_pick::{Viewport, ViewportProbe};
///
/// let viewport = Viewport::new(1170.0, 2532.0);
/// let probe = ViewportProbe::default()
///     .touch_radius_px(900.0)
///     .probe_radius_px(1.0)
///     .clamped(&viewport);
///
/// // Touch radius is limited to half the short side, probe to its minimum.
/// assert!((probe.touch_radius_px - 585.0).abs() < 1e-10);
/// assert!((probe.probe_radius_px - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportProbe {
    /// Radius of the circle bounding the fitting seed region.
    pub touch_radius_px: f64,
    /// Radius of the circle used for point picking.
    pub probe_radius_px: f64,
}

impl Default for ViewportProbe {
    fn default() -> Self {
        Self {
            touch_radius_px: 64.0,
            probe_radius_px: 10.0,
        }
    }
}

impl ViewportProbe {
    /// Creates probe settings from pixel radii.
    #[must_use]
    pub const fn new(touch_radius_px: f64, probe_radius_px: f64) -> Self {
        Self {
            touch_radius_px,
            probe_radius_px,
        }
    }

    /// Set the touch radius in pixels.
    #[must_use]
    pub const fn touch_radius_px(mut self, radius: f64) -> Self {
        self.touch_radius_px = radius;
        self
    }

    /// Set the probe radius in pixels.
    #[must_use]
    pub const fn probe_radius_px(mut self, radius: f64) -> Self {
        self.probe_radius_px = radius;
        self
    }

    /// Clamps both radii to the limits allowed on `viewport`.
    ///
    /// The touch radius is kept within `[MIN_TOUCH_RADIUS_PX, max_view_radius]`
    /// and the probe radius within `[MIN_PROBE_RADIUS_PX, touch_radius]`.
    #[must_use]
    pub fn clamped(self, viewport: &Viewport) -> Self {
        let touch = self
            .touch_radius_px
            .max(MIN_TOUCH_RADIUS_PX)
            .min(viewport.max_view_radius());
        let probe = self.probe_radius_px.max(MIN_PROBE_RADIUS_PX).min(touch);
        Self {
            touch_radius_px: touch,
            probe_radius_px: probe,
        }
    }

    /// Converts the pixel radii to radii per unit of depth.
    ///
    /// `projection` is the camera's projection matrix for `viewport`. The
    /// focal scale of the short viewport axis maps normalized screen radii
    /// to view-space tangents.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport is empty, the focal scale is not
    /// positive, or the resulting radii are not positive.
    pub fn radii(&self, viewport: &Viewport, projection: &Matrix4<f64>) -> PickResult<ProbeRadii> {
        viewport.validate()?;

        let scale = if viewport.is_portrait() {
            projection[(0, 0)]
        } else {
            projection[(1, 1)]
        };
        if !(scale.is_finite() && scale > 0.0) {
            return Err(PickError::InvalidProjection(scale));
        }

        let max_view_radius = viewport.max_view_radius();
        ProbeRadii::new(
            self.touch_radius_px / max_view_radius / scale,
            self.probe_radius_px / max_view_radius / scale,
        )
    }
}

/// Touch and probe radii per unit of depth along the view ray.
///
/// # Example
///
/// ```
/// use scan_pick::ProbeRadii;
///
/// let radii = ProbeRadii::new(0.1, 0.02).unwrap();
/// assert!((radii.touch - 0.1).abs() < 1e-12);
///
/// assert!(ProbeRadii::new(0.1, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProbeRadii {
    /// Seed region radius per unit of depth.
    pub touch: f64,
    /// Picking probe radius per unit of depth.
    pub probe: f64,
}

impl ProbeRadii {
    /// Creates validated radii.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::InvalidTouchRadius`] or
    /// [`PickError::InvalidProbeRadius`] for non-positive or non-finite values.
    pub fn new(touch: f64, probe: f64) -> PickResult<Self> {
        if !(touch.is_finite() && touch > 0.0) {
            return Err(PickError::InvalidTouchRadius(touch));
        }
        if !(probe.is_finite() && probe > 0.0) {
            return Err(PickError::InvalidProbeRadius(probe));
        }
        Ok(Self { touch, probe })
    }
}
