//! Per-frame render output

use serde::Serialize;

use crate::host::TweenProps;
use crate::math::Vec2;
use crate::spline::GradientLine;

/// Placement of the cursor visual
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CursorTransform {
    /// Translation of the cursor element's box
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Rotation pivot inside the box (the arrow tip)
    pub origin: Vec2,
}

impl CursorTransform {
    /// Place the box so its tip lands on `cursor`, arrow pointing against
    /// the direction of travel.
    pub fn for_cursor(cursor: Vec2, heading: f32, tip: Vec2) -> Self {
        Self {
            x: cursor.x - tip.x,
            y: cursor.y - tip.y,
            rotation: heading + 180.0,
            origin: tip,
        }
    }

    /// CSS `transform-origin` value
    pub fn transform_origin(&self) -> String {
        format!("{}px {}px", self.origin.x, self.origin.y)
    }

    /// Properties handed to the tweening host
    pub fn to_props(&self) -> TweenProps {
        TweenProps {
            x: Some(self.x),
            y: Some(self.y),
            rotation: Some(self.rotation),
            transform_origin: Some(self.transform_origin()),
            ..Default::default()
        }
    }
}

/// Everything the host needs to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// SVG `d` attribute for the trail path
    pub path_data: String,
    /// Gradient axis, absent for chains shorter than 2 points
    pub gradient: Option<GradientLine>,
    /// Cursor visual placement
    pub cursor: CursorTransform,
}
