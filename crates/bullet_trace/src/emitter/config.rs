//! Emitter configuration

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{require_non_negative, require_positive, Result, TraceError};
use crate::foundation::math::{self, Vec3};
use crate::trace::TraceShape;

/// Construction-time settings for an [`Emitter`](super::Emitter)
///
/// Never mutated once an emitter is built; every trace it spawns shares the
/// same `shape`, `trace_speed` and `lifetime_sec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Where every trace starts
    pub spawn_origin: Vec3,

    /// Base fire direction, normalized by the emitter
    pub spawn_axis: Vec3,

    /// Traces per second
    pub spawn_rate: f32,

    /// Width of the per-axis jitter range `[-m/2, m/2]` added to the axis
    pub jitter_magnitude: f32,

    /// Traces older than this are removed
    pub lifetime_sec: f32,

    /// Growth speed of each trace in length units per second
    pub trace_speed: f32,

    /// Streak size and proportions
    pub shape: TraceShape,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            spawn_origin: Vec3::new(1.0, 1.0, 1.0),
            spawn_axis: Vec3::x(),
            spawn_rate: 10.0,
            jitter_magnitude: 0.1,
            lifetime_sec: 5.0,
            trace_speed: 1.0,
            shape: TraceShape::default(),
        }
    }
}

impl EmitterConfig {
    /// Create a configuration firing from `origin` along `axis` at `rate` per second
    pub fn new(origin: Vec3, axis: Vec3, rate: f32) -> Self {
        Self {
            spawn_origin: origin,
            spawn_axis: axis,
            spawn_rate: rate,
            ..Default::default()
        }
    }

    /// Set the jitter magnitude
    pub fn with_jitter(mut self, jitter_magnitude: f32) -> Self {
        self.jitter_magnitude = jitter_magnitude;
        self
    }

    /// Set the trace lifetime
    pub fn with_lifetime(mut self, lifetime_sec: f32) -> Self {
        self.lifetime_sec = lifetime_sec;
        self
    }

    /// Set the per-trace speed
    pub fn with_trace_speed(mut self, trace_speed: f32) -> Self {
        self.trace_speed = trace_speed;
        self
    }

    /// Set the streak shape
    pub fn with_shape(mut self, shape: TraceShape) -> Self {
        self.shape = shape;
        self
    }

    /// Seconds between spawns
    pub fn spawn_interval(&self) -> f32 {
        1.0 / self.spawn_rate
    }
}

impl Config for EmitterConfig {
    fn validate(&self) -> Result<()> {
        if !math::is_finite(&self.spawn_origin) {
            return Err(TraceError::invalid("spawn_origin", "must be finite"));
        }
        if math::try_normalize(&self.spawn_axis).is_none() {
            return Err(TraceError::ZeroDirection { what: "spawn_axis" });
        }
        require_positive("spawn_rate", self.spawn_rate)?;
        require_non_negative("jitter_magnitude", self.jitter_magnitude)?;
        require_positive("lifetime_sec", self.lifetime_sec)?;
        require_positive("trace_speed", self.trace_speed)?;
        self.shape.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_valid() {
        let config = EmitterConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.spawn_interval(), 0.1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = EmitterConfig::default();
        assert!(EmitterConfig { spawn_rate: 0.0, ..base.clone() }.validate().is_err());
        assert!(EmitterConfig { spawn_axis: Vec3::zeros(), ..base.clone() }.validate().is_err());
        assert!(base.clone().with_jitter(-0.5).validate().is_err());
        assert!(base.clone().with_lifetime(f32::NAN).validate().is_err());
        assert!(base.clone().with_lifetime(0.0).validate().is_err());
        assert!(base.clone().with_trace_speed(0.0).validate().is_err());
        assert!(base.with_shape(TraceShape::new(0.04, 0.0)).validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let config = EmitterConfig::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 25.0)
            .with_jitter(0.0)
            .with_shape(TraceShape::new(0.1, 8.0));
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = EmitterConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let parsed = EmitterConfig::from_ron_str("(spawn_rate: 4.0, shape: (aspect_ratio: 2.0))").unwrap();
        assert_relative_eq!(parsed.spawn_rate, 4.0);
        assert_relative_eq!(parsed.shape.aspect_ratio, 2.0);
        assert_relative_eq!(parsed.shape.max_size, TraceShape::DEFAULT_MAX_SIZE);
        assert_relative_eq!(parsed.lifetime_sec, 5.0);
    }

    #[test]
    fn test_loaded_config_is_validated() {
        let err = EmitterConfig::from_toml_str("spawn_rate = -1.0").unwrap_err();
        assert!(matches!(err, TraceError::InvalidConfig { field: "spawn_rate", .. }));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("bullet_trace_emitter_{}.ron", std::process::id()));
        let config = EmitterConfig::default().with_lifetime(2.5);
        config.save_to_file(&path).unwrap();
        let loaded = EmitterConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
