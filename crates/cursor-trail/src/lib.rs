//! Cursor Trail
//!
//! A custom cursor that eases toward the pointer, turns to face its
//! direction of travel and drags a smooth "snake" trail behind it.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: `Vec2` and wraparound-safe angle helpers
//! - [`pointer`]: latest raw pointer sample
//! - [`smoothing`]: exponential cursor smoothing
//! - [`orientation`]: heading estimation with idle suppression
//! - [`chain`]: fixed-length trail chain
//! - [`spline`]: Catmull-Rom path and gradient endpoints
//! - [`lifecycle`]: hot-zone activation, suppression and teardown
//! - [`host`]: capability traits the embedder implements
//!
//! [`TrailEngine`] is the pure per-frame simulation. [`CursorTrail`] wraps it
//! with the lifecycle and renders through a [`TrailHost`].
//!
//! ## Example
//!
//! ```rust
//! use cursor_trail::{
//!     CursorTrail, GradientLine, MarkerClasses, PointerCapability, TrailConfig,
//!     TrailSurface, TweenProps, TweenTarget, Tweener,
//! };
//!
//! struct Headless;
//!
//! impl Tweener for Headless {
//!     fn set(&mut self, _target: TweenTarget, _props: &TweenProps) {}
//! }
//! impl TrailSurface for Headless {
//!     fn set_path_data(&mut self, _d: &str) {}
//!     fn set_gradient(&mut self, _line: &GradientLine) {}
//!     fn set_view_box(&mut self, _width: f32, _height: f32) {}
//! }
//! impl MarkerClasses for Headless {
//!     fn set_class(&mut self, _name: &str, _on: bool) {}
//! }
//!
//! let mouse = PointerCapability { can_hover: true, fine_pointer: true };
//! let mut trail = CursorTrail::new(TrailConfig::default(), mouse, Headless).unwrap();
//!
//! trail.pointer_moved(200.0, 120.0);
//! trail.activate();
//! assert!(trail.tick());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: no browser dependencies, testable natively
//! 2. **Explicit lifecycle**: teardown is an event the embedder raises
//! 3. **Frame-driven**: one `tick` per display refresh, nothing blocks

pub mod chain;
pub mod host;
pub mod lifecycle;
pub mod math;
pub mod orientation;
pub mod pointer;
pub mod smoothing;
pub mod spline;

mod config;
mod engine;
mod error;
mod frame;
mod renderer;

pub use chain::TrailChain;
pub use config::{TrailConfig, MAX_PRECISION};
pub use engine::TrailEngine;
pub use error::{ConfigError, ConfigResult, TrailError, TrailResult};
pub use frame::{CursorTransform, Frame};
pub use host::{MarkerClasses, TrailHost, TrailSurface, TweenProps, TweenTarget, Tweener};
pub use lifecycle::{Lifecycle, LoopState, MarkerState, PointerCapability};
pub use math::{AngleState, Vec2};
pub use orientation::OrientationEstimator;
pub use pointer::PointerTracker;
pub use renderer::{CursorTrail, Viewport};
pub use smoothing::PositionSmoother;
pub use spline::{CubicSegment, GradientLine, SplinePath};
