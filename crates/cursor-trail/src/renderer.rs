//! Cursor trail renderer
//!
//! Ties the simulation to the lifecycle and pushes every frame through the
//! host capabilities. The embedder forwards input events, calls `tick` once
//! per animation frame and raises `host_removed` when the cursor markup
//! leaves the document.

use serde::Serialize;

use crate::config::TrailConfig;
use crate::engine::TrailEngine;
use crate::error::{TrailError, TrailResult};
use crate::frame::Frame;
use crate::host::{TrailHost, TweenTarget};
use crate::lifecycle::{Lifecycle, LoopState, PointerCapability};

/// Size of the trail's vector coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// A cursor trail bound to a host
pub struct CursorTrail<H> {
    engine: TrailEngine,
    lifecycle: Lifecycle,
    host: H,
    viewport: Option<Viewport>,
    last_frame: Option<Frame>,
}

impl<H: TrailHost> CursorTrail<H> {
    /// Create an inactive trail. Refused for touch-only or coarse pointers.
    pub fn new(config: TrailConfig, capability: PointerCapability, host: H) -> TrailResult<Self> {
        if !capability.supports_trail() {
            return Err(TrailError::UnsupportedPointer);
        }
        let engine = TrailEngine::new(config)?;

        let mut trail = Self {
            engine,
            lifecycle: Lifecycle::new(),
            host,
            viewport: None,
            last_frame: None,
        };
        trail.sync_markers();
        Ok(trail)
    }

    /// Forward a pointer-move event
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.lifecycle.is_stopped() {
            return;
        }
        self.engine.pointer_moved(x, y);
    }

    /// Pointer entered a hot zone: start a fresh session at the pointer
    pub fn activate(&mut self) {
        if self.lifecycle.enter() {
            self.engine.activate();
            let at = self.engine.pointer();
            tracing::debug!(x = at.x, y = at.y, "cursor trail activated");
        }
        self.sync_markers();
    }

    /// Pointer left a hot zone: hide the cursor and freeze the simulation
    pub fn deactivate(&mut self) {
        if self.lifecycle.leave() {
            self.engine.deactivate();
            tracing::debug!("cursor trail deactivated");
        }
        self.sync_markers();
    }

    /// Pointer entered (`true`) or left a suppress zone
    pub fn suppress(&mut self, hidden: bool) {
        self.lifecycle.set_suppressed(hidden);
        self.sync_markers();
    }

    /// Match the trail's coordinate space to the window
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.lifecycle.is_stopped() {
            return;
        }
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            tracing::debug!(width, height, "ignoring invalid viewport size");
            return;
        }
        self.host.set_view_box(width, height);
        self.viewport = Some(Viewport { width, height });
    }

    /// Run one animation frame. Returns true if something was drawn.
    pub fn tick(&mut self) -> bool {
        if self.lifecycle.is_stopped() || !self.lifecycle.is_active() {
            return false;
        }
        let Some(frame) = self.engine.tick() else {
            return false;
        };

        self.host.set_path_data(&frame.path_data);
        if let Some(gradient) = &frame.gradient {
            self.host.set_gradient(gradient);
        }
        self.host.set(TweenTarget::Cursor, &frame.cursor.to_props());

        self.last_frame = Some(frame);
        true
    }

    /// The host element left the document. No frame is produced afterwards.
    pub fn host_removed(&mut self) {
        if self.lifecycle.stop() {
            self.engine.deactivate();
            self.sync_markers();
            tracing::debug!("cursor trail host removed, frame loop stopped");
        }
    }

    /// Simulation state
    #[inline]
    pub fn engine(&self) -> &TrailEngine {
        &self.engine
    }

    /// Inside a hot zone
    #[inline]
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Cursor visual hidden by a suppress zone
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.lifecycle.is_suppressed()
    }

    /// False once the host is gone
    #[inline]
    pub fn is_running(&self) -> bool {
        self.lifecycle.loop_state() == LoopState::Running
    }

    /// Last synced coordinate space
    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Most recently drawn frame
    #[inline]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// The host capabilities
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    fn sync_markers(&mut self) {
        let markers = self.lifecycle.markers();
        let config = self.engine.config();
        self.host.set_class(&config.active_class, markers.active);
        self.host.set_class(&config.hidden_class, markers.hidden);
    }
}
