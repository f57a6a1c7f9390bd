//! Activation, suppression and teardown state

use serde::Serialize;

/// What the pointing device can do, as reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerCapability {
    /// `(hover: hover)`
    pub can_hover: bool,
    /// `(pointer: fine)`
    pub fine_pointer: bool,
}

impl PointerCapability {
    /// Mouse-like device: the only kind the trail engages for
    #[inline]
    pub fn supports_trail(self) -> bool {
        self.can_hover && self.fine_pointer
    }
}

/// Whether the frame loop may still run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopState {
    #[default]
    Running,
    /// Host element removed; terminal
    Stopped,
}

/// Body marker classes implied by the lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MarkerState {
    pub active: bool,
    pub hidden: bool,
}

/// Hot-zone and suppress-zone hover tracking
#[derive(Clone, Copy, Debug, Default)]
pub struct Lifecycle {
    active: bool,
    suppressed: bool,
    loop_state: LoopState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a hot zone. Returns true when this starts a session.
    pub fn enter(&mut self) -> bool {
        if self.is_stopped() {
            return false;
        }
        // Re-entering while active still starts a fresh session
        self.active = true;
        true
    }

    /// Pointer left a hot zone. Returns true when a session ended.
    pub fn leave(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active && !self.is_stopped()
    }

    /// Hide (`true`) or show the cursor visual without touching the trail
    pub fn set_suppressed(&mut self, suppressed: bool) {
        if !self.is_stopped() {
            self.suppressed = suppressed;
        }
    }

    /// Host element is gone. Returns false if it already was.
    pub fn stop(&mut self) -> bool {
        if self.is_stopped() {
            return false;
        }
        self.loop_state = LoopState::Stopped;
        self.active = false;
        self.suppressed = false;
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    #[inline]
    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.loop_state == LoopState::Stopped
    }

    /// Classes the body should carry right now
    pub fn markers(&self) -> MarkerState {
        MarkerState {
            active: self.active,
            hidden: self.suppressed,
        }
    }
}
