//! Degree wrapping and shortest-path angular interpolation

/// Wrap an angle in degrees into (-180, 180]
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Signed difference `to - from` along the shortest arc
#[inline]
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    wrap_degrees(to - from)
}

/// Heading tracker: a target angle and the smoothed angle chasing it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleState {
    /// Heading derived from the latest motion
    pub target: f32,
    /// Rendered heading
    pub current: f32,
}

impl AngleState {
    /// Move `current` toward `target` by `factor` of the shortest-arc gap.
    ///
    /// Returns the applied delta.
    pub fn step(&mut self, factor: f32) -> f32 {
        let delta = shortest_delta(self.current, self.target) * factor;
        self.current = wrap_degrees(self.current + delta);
        delta
    }

    /// Zero both angles
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
