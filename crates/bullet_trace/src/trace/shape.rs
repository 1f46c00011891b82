//! Streak shape shared by every trace an emitter spawns

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, Result};

/// Size ceiling and proportions of a streak
///
/// The short axis ("height") grows until it reaches `max_size`; the long
/// axis is always `aspect_ratio` times the short axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceShape {
    /// Largest short-axis size a streak reaches
    pub max_size: f32,

    /// Long axis divided by short axis
    pub aspect_ratio: f32,
}

impl TraceShape {
    /// Short axis ceiling of the default shape
    pub const DEFAULT_MAX_SIZE: f32 = 1.0 / 25.0;

    /// Proportions of the default 512x32 streak texture
    pub const DEFAULT_ASPECT_RATIO: f32 = 512.0 / 32.0;

    /// Create a shape with explicit size and proportions
    pub fn new(max_size: f32, aspect_ratio: f32) -> Self {
        Self {
            max_size,
            aspect_ratio,
        }
    }

    /// Set the short-axis ceiling
    pub fn with_max_size(mut self, max_size: f32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the long/short proportion
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Full-scale length of the long axis
    pub fn max_length(&self) -> f32 {
        self.aspect_ratio * self.max_size
    }

    /// Seconds a streak moving at `speed` needs to reach `max_size`
    pub fn growth_duration(&self, speed: f32) -> f32 {
        self.max_size / speed
    }

    /// Validate the shape
    pub fn validate(&self) -> Result<()> {
        require_positive("max_size", self.max_size)?;
        require_positive("aspect_ratio", self.aspect_ratio)
    }
}

impl Default for TraceShape {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIZE, Self::DEFAULT_ASPECT_RATIO)
    }
}
