//! Rendering context handed to text measurement.

use log::warn;
use std::env;

/// Environment variable overriding the device pixel ratio.
const DEVICE_PIXEL_RATIO_VAR: &str = "CSS_TEXT_DEVICE_PIXEL_RATIO";

/// Target surface description that affects measured text extents.
///
/// Widths are snapped up to the device pixel grid so that a run never
/// measures narrower than it paints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    device_pixel_ratio: f32,
}

impl Default for RenderContext {
    #[inline]
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
        }
    }
}

impl RenderContext {
    /// Construct a context for a surface with the given device pixel ratio.
    ///
    /// Non-positive or non-finite ratios fall back to 1.0.
    #[inline]
    pub fn new(device_pixel_ratio: f32) -> Self {
        if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            Self { device_pixel_ratio }
        } else {
            warn!("ignoring device pixel ratio {device_pixel_ratio}; using 1.0");
            Self::default()
        }
    }

    /// Load the context from the environment.
    ///
    /// Reads `CSS_TEXT_DEVICE_PIXEL_RATIO` (default: 1.0). Unparsable or
    /// non-positive values are ignored.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        env::var(DEVICE_PIXEL_RATIO_VAR)
            .ok()
            .and_then(|val| val.trim().parse::<f32>().ok())
            .map_or_else(Self::default, Self::new)
    }

    #[inline]
    pub const fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Round a CSS-pixel length up to the next device pixel boundary.
    #[inline]
    pub fn snap_up(&self, length: f32) -> f32 {
        (length * self.device_pixel_ratio).ceil() / self.device_pixel_ratio
    }
}
