//! Core math types

mod angle;
mod vec2;

pub use angle::{shortest_delta, wrap_degrees, AngleState};
pub use vec2::Vec2;
