//! Linear gradient endpoints along the trail

use serde::Serialize;

use crate::math::Vec2;

/// Gradient axis from the faded tail to the solid head
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientLine {
    /// `x1`/`y1`: tail of the trail
    pub from: Vec2,
    /// `x2`/`y2`: head of the trail
    pub to: Vec2,
}

impl GradientLine {
    /// Span the gradient over a head-to-tail chain. `None` below 2 points.
    pub fn along(points: &[Vec2]) -> Option<Self> {
        match points {
            [head, .., tail] => Some(Self {
                from: *tail,
                to: *head,
            }),
            _ => None,
        }
    }
}
