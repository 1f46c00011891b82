//! Error types
//!
//! Only construction can fail. Once a trace or emitter exists, per-frame
//! updates are plain arithmetic and return geometry directly.

use crate::config::ConfigError;

/// Result alias for fallible construction and configuration loading
pub type Result<T> = std::result::Result<T, TraceError>;

/// Errors reported when building traces and emitters
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    /// A configuration value is outside its allowed range
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A direction vector could not be normalized
    #[error("Direction `{what}` is zero-length or not finite")]
    ZeroDirection {
        /// Which direction was rejected
        what: &'static str,
    },

    /// Loading or saving a configuration file failed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TraceError {
    /// Shorthand for [`TraceError::InvalidConfig`]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Fail unless `value` is finite and strictly positive
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TraceError::invalid(field, format!("must be finite and > 0, got {value}")))
    }
}

/// Fail unless `value` is finite and non-negative
pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TraceError::invalid(field, format!("must be finite and >= 0, got {value}")))
    }
}
