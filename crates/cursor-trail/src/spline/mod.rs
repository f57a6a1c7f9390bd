//! Drawable geometry for the trail
//!
//! - `catmull_rom`: smooth cubic path through the chain
//! - `gradient`: endpoints of the fade along the chain

mod catmull_rom;
mod gradient;

pub use catmull_rom::{CubicSegment, SplinePath};
pub use gradient::GradientLine;
