//! Pointer input and session reset

use super::TrailEngine;

impl TrailEngine {
    /// Record a pointer-move sample. Accepted while inactive so the next
    /// session starts where the pointer is.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.record(x, y);
    }

    /// Start a fresh session at the pointer: cursor and every trail point
    /// collapse onto it and the heading returns to 0°.
    pub fn activate(&mut self) {
        let at = self.pointer.position();
        self.pointer.settle();
        self.smoother.reset(at);
        self.chain.reseed(at);
        self.orientation.reset();
        self.active = true;
    }

    /// Freeze the simulation. State is kept until the next `activate`.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TrailConfig;
    use crate::engine::TrailEngine;
    use crate::math::Vec2;

    #[test]
    fn test_activate_collapses_onto_pointer() {
        let mut engine = TrailEngine::new(TrailConfig::default()).unwrap();
        engine.pointer_moved(120.0, 80.0);
        engine.activate();

        assert!(engine.is_active());
        assert_eq!(engine.cursor(), Vec2::new(120.0, 80.0));
        assert!(engine.trail().iter().all(|p| *p == Vec2::new(120.0, 80.0)));
        assert_eq!(engine.heading(), 0.0);
        assert_eq!(engine.target_heading(), 0.0);
    }

    #[test]
    fn test_deactivate_freezes_state() {
        let mut engine = TrailEngine::new(TrailConfig::default()).unwrap();
        engine.activate();
        engine.pointer_moved(200.0, 0.0);
        engine.tick();
        engine.deactivate();

        let cursor = engine.cursor();
        let trail = engine.trail().to_vec();
        engine.pointer_moved(400.0, 400.0);
        assert!(engine.tick().is_none());
        assert_eq!(engine.cursor(), cursor);
        assert_eq!(engine.trail(), trail.as_slice());
    }
}
