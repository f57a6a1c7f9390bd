//! Trail tunables
//!
//! Defaults reproduce the hand-tuned constants of the production cursor.
//! Rotation smoothing and the idle threshold have no derivation behind them,
//! so every value stays configurable.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::math::Vec2;

/// Highest decimal precision accepted for path serialization
pub const MAX_PRECISION: usize = 6;

/// Configuration for a cursor trail
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    /// Tip of the arrow glyph inside the cursor element's 32x28 box
    pub tip_offset: Vec2,
    /// Distance behind the cursor tip where the trail starts
    pub trail_offset: f32,
    /// Fraction of the cursor-to-pointer gap closed per frame
    pub position_lerp: f32,
    /// Number of points in the trail chain
    pub max_points: usize,
    /// Share of the gap each trail point keeps per frame
    pub trail_decay: f32,
    /// Fraction of the angular gap closed per frame
    pub rotation_lerp: f32,
    /// Below this speed (px/frame) the heading is frozen
    pub idle_speed_threshold: f32,
    /// Catmull-Rom tension
    pub tension: f32,
    /// Decimal places in serialized path data
    pub precision: usize,
    /// Body class set while a hot zone is hovered
    pub active_class: String,
    /// Body class set while a suppress zone is hovered
    pub hidden_class: String,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            tip_offset: Vec2::new(0.0, 14.0),
            trail_offset: 32.0,
            position_lerp: 0.25,
            max_points: 50,
            trail_decay: 0.92,
            rotation_lerp: 0.15,
            idle_speed_threshold: 0.5,
            tension: 0.5,
            precision: 2,
            active_class: "cursor-active".to_string(),
            hidden_class: "cursor-hidden".to_string(),
        }
    }
}

impl TrailConfig {
    /// Parse a camelCase JSON object; omitted keys keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: TrailConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable against the range the update rules need
    pub fn validate(&self) -> ConfigResult<()> {
        let scalars = [
            ("tipOffset.x", self.tip_offset.x),
            ("tipOffset.y", self.tip_offset.y),
            ("trailOffset", self.trail_offset),
            ("positionLerp", self.position_lerp),
            ("trailDecay", self.trail_decay),
            ("rotationLerp", self.rotation_lerp),
            ("idleSpeedThreshold", self.idle_speed_threshold),
            ("tension", self.tension),
        ];
        if let Some((field, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*field));
        }

        check_range("positionLerp", self.position_lerp, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
        check_range("rotationLerp", self.rotation_lerp, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
        check_range("trailDecay", self.trail_decay, "[0, 1)", |v| (0.0..1.0).contains(&v))?;
        check_range("trailOffset", self.trail_offset, "[0, inf)", |v| v >= 0.0)?;
        check_range("idleSpeedThreshold", self.idle_speed_threshold, "[0, inf)", |v| v >= 0.0)?;
        check_range("tension", self.tension, "[0, inf)", |v| v >= 0.0)?;

        if self.max_points < 2 {
            return Err(ConfigError::TooFewPoints(self.max_points));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooHigh(self.precision));
        }
        check_class("activeClass", &self.active_class)?;
        check_class("hiddenClass", &self.hidden_class)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: f32,
    range: &'static str,
    accept: impl Fn(f32) -> bool,
) -> ConfigResult<()> {
    if accept(value) {
        Ok(())
    } else {
        tracing::warn!(field, value, range, "rejected trail config value");
        Err(ConfigError::OutOfRange { field, value, range })
    }
}

fn check_class(field: &'static str, name: &str) -> ConfigResult<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidClassName(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrailConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_points, 50);
        assert!((config.trail_decay - 0.92).abs() < 0.0001);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TrailConfig::from_json(r#"{ "maxPoints": 20, "positionLerp": 0.5 }"#).unwrap();
        assert_eq!(config.max_points, 20);
        assert!((config.position_lerp - 0.5).abs() < 0.0001);
        assert!((config.rotation_lerp - 0.15).abs() < 0.0001);
        assert_eq!(config.active_class, "cursor-active");
    }

    #[test]
    fn test_rejects_out_of_range_lerp() {
        let config = TrailConfig {
            position_lerp: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "positionLerp", .. })
        ));
    }

    #[test]
    fn test_rejects_decay_of_one() {
        let config = TrailConfig {
            trail_decay: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "trailDecay", .. })
        ));
    }

    #[test]
    fn test_rejects_short_chain() {
        let config = TrailConfig {
            max_points: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooFewPoints(1))));
    }

    #[test]
    fn test_rejects_nan() {
        let config = TrailConfig {
            tension: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonFinite("tension"))));
    }

    #[test]
    fn test_rejects_bad_class_name() {
        let config = TrailConfig {
            hidden_class: "cursor hidden".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidClassName("hiddenClass"))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            TrailConfig::from_json("{ maxPoints: 3 "),
            Err(ConfigError::Json(_))
        ));
    }
}
