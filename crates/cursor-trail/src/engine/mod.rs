//! Trail simulation
//!
//! This module is split into focused submodules:
//! - `activation`: pointer input and session reset
//! - `step`: the per-frame update producing a `Frame`

mod activation;
mod step;

use crate::chain::TrailChain;
use crate::config::TrailConfig;
use crate::error::ConfigResult;
use crate::math::Vec2;
use crate::orientation::OrientationEstimator;
use crate::pointer::PointerTracker;
use crate::smoothing::PositionSmoother;

/// Pointer, smoothed cursor, heading and trail chain for one cursor
///
/// Pure state: no host calls, no clocks. `tick` is expected once per
/// display refresh and does nothing while inactive.
#[derive(Clone, Debug)]
pub struct TrailEngine {
    config: TrailConfig,
    pointer: PointerTracker,
    smoother: PositionSmoother,
    orientation: OrientationEstimator,
    chain: TrailChain,
    active: bool,
}

impl TrailEngine {
    /// Create an inactive engine from a validated config
    pub fn new(config: TrailConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            pointer: PointerTracker::new(),
            smoother: PositionSmoother::new(config.position_lerp),
            orientation: OrientationEstimator::new(
                config.rotation_lerp,
                config.idle_speed_threshold,
            ),
            chain: TrailChain::new(config.max_points, config.trail_decay, Vec2::ZERO),
            active: false,
            config,
        })
    }

    /// Tunables in effect
    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Whether frames are being produced
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Latest raw pointer position
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    /// Smoothed cursor position
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.smoother.position()
    }

    /// Smoothed heading in degrees
    #[inline]
    pub fn heading(&self) -> f32 {
        self.orientation.current()
    }

    /// Heading the cursor is turning toward
    #[inline]
    pub fn target_heading(&self) -> f32 {
        self.orientation.target()
    }

    /// Trail points, head first
    #[inline]
    pub fn trail(&self) -> &[Vec2] {
        self.chain.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_engine_is_inactive() {
        let engine = TrailEngine::new(TrailConfig::default()).unwrap();
        assert!(!engine.is_active());
        assert_eq!(engine.trail().len(), 50);
        assert_eq!(engine.heading(), 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = TrailConfig {
            max_points: 0,
            ..Default::default()
        };
        assert!(matches!(TrailEngine::new(config), Err(ConfigError::TooFewPoints(0))));
    }
}
