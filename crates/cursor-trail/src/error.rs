//! Error types for the cursor trail.

use thiserror::Error;

/// Result type for configuration handling
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type for trail construction
pub type TrailResult<T> = std::result::Result<T, TrailError>;

/// Rejected trail configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A tunable lies outside its accepted interval
    #[error("{field} = {value} is outside {range}")]
    OutOfRange {
        /// Config key (camelCase, as written in JSON)
        field: &'static str,
        /// Offending value
        value: f32,
        /// Human readable interval
        range: &'static str,
    },

    /// A tunable is NaN or infinite
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    /// The trail needs a head and at least one follower
    #[error("maxPoints = {0}, the trail needs at least 2 points")]
    TooFewPoints(usize),

    /// Path coordinates would be serialized with too many decimals
    #[error("precision = {0} exceeds the maximum of {max}", max = crate::config::MAX_PRECISION)]
    PrecisionTooHigh(usize),

    /// A marker class name is empty or contains whitespace
    #[error("{0} must be a single non-empty class name")]
    InvalidClassName(&'static str),

    /// JSON did not parse into a config
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons the trail refuses to start
#[derive(Error, Debug)]
pub enum TrailError {
    /// Device lacks hover or fine pointer support
    #[error("pointer device cannot hover with fine precision")]
    UnsupportedPointer,

    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}
