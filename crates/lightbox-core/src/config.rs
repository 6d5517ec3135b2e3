use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_VELOCITY};
use crate::error::{LightboxError, Result};

/// Per-view tuning supplied by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Resting zoom. Pinching may undershoot to half of this until release.
    pub min_scale: f64,
    pub max_scale: f64,
    /// Pinch damping; larger is less sensitive.
    pub zoom_velocity: f64,
    pub pinch_focus: PinchFocus,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_velocity: DEFAULT_ZOOM_VELOCITY,
            pinch_focus: PinchFocus::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(LightboxError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(LightboxError::InvalidConfig(format!(
                "max_scale ({}) must be at least min_scale ({})",
                self.max_scale, self.min_scale
            )));
        }
        if !self.zoom_velocity.is_finite() || self.zoom_velocity <= 0.0 {
            return Err(LightboxError::InvalidConfig(format!(
                "zoom_velocity must be positive, got {}",
                self.zoom_velocity
            )));
        }
        Ok(())
    }

    /// Lowest scale reachable mid-gesture.
    pub fn scale_floor(&self) -> f64 {
        self.min_scale - self.min_scale / 2.0
    }
}

/// Point a pinch zooms around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinchFocus {
    /// Pinch never translates the image; zoom stays centred on the image.
    #[default]
    ImageCenter,
    /// The midpoint between the fingers stays fixed on screen.
    TouchCenter,
}

impl fmt::Display for PinchFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageCenter => write!(f, "Image center"),
            Self::TouchCenter => write!(f, "Touch center"),
        }
    }
}
