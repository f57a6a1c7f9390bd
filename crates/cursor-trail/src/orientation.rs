//! Heading estimation from cursor motion

use crate::math::{AngleState, Vec2};

/// Derives the cursor heading from the cursor and the point just behind it
#[derive(Clone, Copy, Debug)]
pub struct OrientationEstimator {
    angle: AngleState,
    rotation_lerp: f32,
    idle_threshold: f32,
}

impl OrientationEstimator {
    /// Create an estimator facing 0°
    pub fn new(rotation_lerp: f32, idle_threshold: f32) -> Self {
        Self {
            angle: AngleState::default(),
            rotation_lerp,
            idle_threshold,
        }
    }

    /// Update from the smoothed cursor, the second trail point and the
    /// pointer's travel this frame.
    ///
    /// The target only moves while `speed` exceeds the idle threshold.
    /// Returns the smoothed heading in degrees.
    pub fn update(&mut self, cursor: Vec2, behind: Vec2, speed: f32) -> f32 {
        if speed > self.idle_threshold {
            let direction = cursor - behind;
            if direction != Vec2::ZERO {
                self.angle.target = direction.degrees();
            }
        }
        self.angle.step(self.rotation_lerp);
        self.angle.current
    }

    /// Face 0° again
    pub fn reset(&mut self) {
        self.angle.reset();
    }

    /// Raw heading from the latest motion
    #[inline]
    pub fn target(&self) -> f32 {
        self.angle.target
    }

    /// Smoothed heading
    #[inline]
    pub fn current(&self) -> f32 {
        self.angle.current
    }
}
