//! Catmull-Rom to cubic Bezier conversion

use std::fmt::Write;

use serde::Serialize;

use crate::math::Vec2;

/// One cubic Bezier segment; its start is the previous segment's end
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CubicSegment {
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

/// Piecewise cubic path through an ordered point set
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SplinePath {
    start: Option<Vec2>,
    segments: Vec<CubicSegment>,
}

impl SplinePath {
    /// Build a path visiting every point in order.
    ///
    /// Neighbours past either end are clamped to the boundary point.
    /// Fewer than 2 points give an empty path.
    pub fn catmull_rom(points: &[Vec2], tension: f32) -> Self {
        if points.len() < 2 {
            return Self::default();
        }

        let last = points.len() - 1;
        let scale = tension / 6.0;
        let segments = (0..last)
            .map(|i| {
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(last)];
                CubicSegment {
                    control1: p1 + (p2 - p0) * scale,
                    control2: p2 - (p3 - p1) * scale,
                    end: p2,
                }
            })
            .collect();

        Self {
            start: Some(points[0]),
            segments,
        }
    }

    /// No drawable geometry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// First point
    #[inline]
    pub fn start(&self) -> Option<Vec2> {
        self.start
    }

    /// Cubic segments in drawing order
    #[inline]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Last point
    pub fn end(&self) -> Option<Vec2> {
        self.segments.last().map(|s| s.end).or(self.start)
    }

    /// SVG path data: `M x y C c1x c1y, c2x c2y, x y ...`
    pub fn to_svg(&self, precision: usize) -> String {
        let Some(start) = self.start else {
            return String::new();
        };

        let mut d = String::with_capacity(16 + self.segments.len() * 48);
        let _ = write!(d, "M {}", coord(start, precision));
        for segment in &self.segments {
            let _ = write!(
                d,
                " C {}, {}, {}",
                coord(segment.control1, precision),
                coord(segment.control2, precision),
                coord(segment.end, precision),
            );
        }
        d
    }
}

fn coord(p: Vec2, precision: usize) -> String {
    format!("{} {}", number(p.x, precision), number(p.y, precision))
}

/// Fixed-decimal formatting that never prints `-0.00`
fn number(value: f32, precision: usize) -> String {
    let scale = 10f32.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", precision, rounded)
}
