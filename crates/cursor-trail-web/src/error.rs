//! Browser setup errors

use cursor_trail::{ConfigError, TrailError};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result alias for browser setup
pub type SetupResult<T> = Result<T, SetupError>;

/// Why the trail could not attach to the page
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("no window or document available")]
    NoDocument,

    #[error("pointer cannot hover with fine precision")]
    UnsupportedPointer,

    #[error("required element not found: {0}")]
    MissingElement(String),

    #[error("no hot zones match {0}")]
    NoHotZones(String),

    #[error("GSAP not found")]
    MissingTweenLibrary,

    #[error("invalid selector {selector}: {message}")]
    Selector { selector: String, message: String },

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SetupError {
    pub(crate) fn js(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }

    pub(crate) fn selector(selector: &str, value: JsValue) -> Self {
        Self::Selector {
            selector: selector.to_string(),
            message: describe(&value),
        }
    }

    /// Expected on touch devices; not worth a console warning
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::UnsupportedPointer)
    }
}

impl From<TrailError> for SetupError {
    fn from(err: TrailError) -> Self {
        match err {
            TrailError::UnsupportedPointer => Self::UnsupportedPointer,
            TrailError::Config(err) => Self::Config(err),
        }
    }
}

fn describe(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_errors_map_across() {
        assert!(matches!(
            SetupError::from(TrailError::UnsupportedPointer),
            SetupError::UnsupportedPointer
        ));
        let config = TrailError::Config(ConfigError::TooFewPoints(1));
        assert!(matches!(
            SetupError::from(config),
            SetupError::Config(ConfigError::TooFewPoints(1))
        ));
    }

    #[test]
    fn test_only_unsupported_pointer_is_silent() {
        assert!(SetupError::UnsupportedPointer.is_silent());
        assert!(!SetupError::MissingTweenLibrary.is_silent());
        assert_eq!(SetupError::MissingTweenLibrary.to_string(), "GSAP not found");
    }
}
