//! Page configuration: trail tunables plus the DOM selectors to bind

use cursor_trail::TrailConfig;
use serde::{Deserialize, Serialize};

use crate::error::SetupResult;

/// CSS selectors for the markup the trail attaches to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSelectors {
    /// Elements whose hover turns the custom cursor on
    pub hot_zones: String,
    /// The cursor visual moved by the tweening library
    pub cursor: String,
    /// The SVG the trail is drawn into
    pub trail_canvas: String,
    /// The `<path>` inside the SVG
    pub trail_path: String,
    /// Optional `<linearGradient>` painted along the trail
    pub gradient: String,
    /// Elements that hide the cursor visual while hovered
    pub suppress_zones: String,
}

impl Default for HostSelectors {
    fn default() -> Self {
        Self {
            hot_zones: "[data-cursor]".to_string(),
            cursor: "#cursor-hijack".to_string(),
            trail_canvas: "#cursor-trail-canvas".to_string(),
            trail_path: "#cursor-trail-path".to_string(),
            gradient: "#trailGradient".to_string(),
            suppress_zones: ".button-wrapper".to_string(),
        }
    }
}

/// Everything `init_cursor_trail` accepts
///
/// Trail tunables sit at the top level next to a `selectors` object:
///
/// ```json
/// { "positionLerp": 0.3, "selectors": { "hotZones": ".hero" } }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebConfig {
    #[serde(flatten)]
    pub trail: TrailConfig,
    pub selectors: HostSelectors,
}

impl WebConfig {
    /// Parse and validate. `None` yields the defaults.
    pub fn from_json(json: Option<&str>) -> SetupResult<Self> {
        let config: Self = match json {
            Some(json) if !json.trim().is_empty() => serde_json::from_str(json)?,
            _ => Self::default(),
        };
        config.trail.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;

    #[test]
    fn test_defaults_without_json() {
        let config = WebConfig::from_json(None).unwrap();
        assert_eq!(config.selectors, HostSelectors::default());
        assert_eq!(config.trail.max_points, 50);
        assert_eq!(config.selectors.cursor, "#cursor-hijack");
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "positionLerp": 0.4,
            "selectors": { "hotZones": ".hero", "suppressZones": "button" }
        }"#;
        let config = WebConfig::from_json(Some(json)).unwrap();
        assert_eq!(config.trail.position_lerp, 0.4);
        assert_eq!(config.trail.trail_offset, 32.0);
        assert_eq!(config.selectors.hot_zones, ".hero");
        assert_eq!(config.selectors.suppress_zones, "button");
        assert_eq!(config.selectors.trail_path, "#cursor-trail-path");
    }

    #[test]
    fn test_invalid_tunables_rejected() {
        let err = WebConfig::from_json(Some(r#"{ "maxPoints": 1 }"#)).unwrap_err();
        assert!(matches!(err, SetupError::Config(_)));

        let err = WebConfig::from_json(Some("{ not json")).unwrap_err();
        assert!(matches!(err, SetupError::Json(_)));
    }
}
