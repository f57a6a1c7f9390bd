//! Fixed-length trail chain
//!
//! Index 0 is the head, the last index the tail. Points are only ever
//! repositioned; the length is fixed at construction.

use crate::math::Vec2;

/// Ordered points trailing the cursor, each chasing its predecessor
#[derive(Clone, Debug)]
pub struct TrailChain {
    points: Vec<Vec2>,
    decay: f32,
}

impl TrailChain {
    /// Create a chain of `len` points collapsed onto `seed`
    pub fn new(len: usize, decay: f32, seed: Vec2) -> Self {
        Self {
            points: vec![seed; len],
            decay,
        }
    }

    /// Collapse every point onto `position`
    pub fn reseed(&mut self, position: Vec2) {
        self.points.fill(position);
    }

    /// Pin the head to `head`, then let every follower close
    /// `1 - decay` of the gap to the point in front of it.
    pub fn advance(&mut self, head: Vec2) {
        let Some(first) = self.points.first_mut() else {
            return;
        };
        *first = head;

        let catch_up = 1.0 - self.decay;
        for i in 1..self.points.len() {
            let leader = self.points[i - 1];
            let point = &mut self.points[i];
            *point = Vec2::lerp(*point, leader, catch_up);
        }
    }

    /// Where the head sits for a cursor at `cursor` facing `heading` degrees:
    /// `offset` units back along the heading.
    pub fn anchor_behind(cursor: Vec2, heading: f32, offset: f32) -> Vec2 {
        cursor - Vec2::from_degrees(heading) * offset
    }

    /// Points from head to tail
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a zero-length chain
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point right behind the head (the head itself for 1-point chains)
    pub fn second(&self) -> Vec2 {
        self.points
            .get(1)
            .or_else(|| self.points.first())
            .copied()
            .unwrap_or_default()
    }
}
