//! Exponential position smoothing

use crate::math::Vec2;

/// Damps the rendered cursor toward the raw pointer once per frame
#[derive(Clone, Copy, Debug)]
pub struct PositionSmoother {
    position: Vec2,
    factor: f32,
}

impl PositionSmoother {
    /// Create a smoother with lerp factor `factor` in (0, 1]
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            factor,
        }
    }

    /// Jump straight to `position`
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Close `factor` of the remaining gap to `target` on each axis
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.position = Vec2::lerp(self.position, target, self.factor);
        self.position
    }

    /// Current smoothed position
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_closes_fraction_of_gap() {
        let mut smoother = PositionSmoother::new(0.25);
        let pos = smoother.step(Vec2::new(100.0, -40.0));
        assert!((pos.x - 25.0).abs() < 0.001);
        assert!((pos.y - (-10.0)).abs() < 0.001);
    }

    #[test]
    fn test_distance_strictly_decreases() {
        for factor in [0.05, 0.25, 0.5, 0.9] {
            let mut smoother = PositionSmoother::new(factor);
            let target = Vec2::new(300.0, 200.0);
            let mut last = smoother.position().distance(target);
            while last > 0.01 {
                smoother.step(target);
                let now = smoother.position().distance(target);
                assert!(now < last, "factor {} did not converge: {} -> {}", factor, last, now);
                last = now;
            }
        }
    }

    #[test]
    fn test_never_overshoots() {
        let mut smoother = PositionSmoother::new(1.0);
        let target = Vec2::new(12.0, 7.0);
        smoother.step(target);
        assert_eq!(smoother.position(), target);
        smoother.step(target);
        assert_eq!(smoother.position(), target);
    }

    #[test]
    fn test_converges_to_target() {
        let mut smoother = PositionSmoother::new(0.25);
        let target = Vec2::new(50.0, 50.0);
        for _ in 0..200 {
            smoother.step(target);
        }
        assert!(smoother.position().distance(target) < 0.001);
    }
}
