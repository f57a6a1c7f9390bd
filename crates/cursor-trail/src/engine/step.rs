//! Per-frame update

use crate::chain::TrailChain;
use crate::frame::{CursorTransform, Frame};
use crate::spline::{GradientLine, SplinePath};
use super::TrailEngine;

impl TrailEngine {
    /// Advance one animation frame.
    ///
    /// Order matters: the heading is measured against the second trail
    /// point before the chain moves, and the head is then placed behind
    /// the freshly smoothed cursor.
    pub fn tick(&mut self) -> Option<Frame> {
        if !self.active {
            return None;
        }

        let speed = self.pointer.frame_motion();
        let cursor = self.smoother.step(self.pointer.position());
        let heading = self.orientation.update(cursor, self.chain.second(), speed);

        let head = TrailChain::anchor_behind(cursor, heading, self.config.trail_offset);
        self.chain.advance(head);

        let points = self.chain.points();
        let path = SplinePath::catmull_rom(points, self.config.tension);

        Some(Frame {
            path_data: path.to_svg(self.config.precision),
            gradient: GradientLine::along(points),
            cursor: CursorTransform::for_cursor(cursor, heading, self.config.tip_offset),
        })
    }
}
