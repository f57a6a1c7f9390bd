//! Latest raw pointer position
//!
//! Only the newest coordinate pair is kept, plus the one seen by the
//! previous frame so per-frame pointer speed can be measured. Smoothing
//! happens per frame, downstream of the tracker.

use crate::math::Vec2;

/// Records the raw pointer location from move events
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    latest: Vec2,
    sampled: Vec2,
}

impl PointerTracker {
    /// Create a tracker at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pointer-move sample. Non-finite samples are dropped.
    pub fn record(&mut self, x: f32, y: f32) {
        let sample = Vec2::new(x, y);
        if sample.is_finite() {
            self.latest = sample;
        }
    }

    /// Latest recorded position
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.latest
    }

    /// Distance travelled since the previous call, in px per frame.
    /// Call once per frame.
    pub fn frame_motion(&mut self) -> f32 {
        let moved = self.latest.distance(self.sampled);
        self.sampled = self.latest;
        moved
    }

    /// Treat the current position as already seen
    pub fn settle(&mut self) {
        self.sampled = self.latest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_latest() {
        let mut tracker = PointerTracker::new();
        tracker.record(10.0, 20.0);
        tracker.record(30.0, 40.0);
        assert_eq!(tracker.position(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_drops_non_finite() {
        let mut tracker = PointerTracker::new();
        tracker.record(5.0, 5.0);
        tracker.record(f32::NAN, 1.0);
        tracker.record(1.0, f32::INFINITY);
        assert_eq!(tracker.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_frame_motion_measures_since_last_frame() {
        let mut tracker = PointerTracker::new();
        tracker.record(3.0, 4.0);
        assert_eq!(tracker.frame_motion(), 5.0);
        assert_eq!(tracker.frame_motion(), 0.0);

        tracker.record(10.0, 10.0);
        tracker.record(3.0, 4.0);
        assert_eq!(tracker.frame_motion(), 0.0);
    }

    #[test]
    fn test_settle_discards_pending_motion() {
        let mut tracker = PointerTracker::new();
        tracker.record(100.0, 0.0);
        tracker.settle();
        assert_eq!(tracker.frame_motion(), 0.0);
    }
}
