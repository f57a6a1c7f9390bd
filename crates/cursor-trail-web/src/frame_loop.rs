//! Self-rescheduling `requestAnimationFrame` loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{SetupError, SetupResult};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `on_frame` once per display refresh until it returns false or
/// `stop` is called
pub struct FrameLoop {
    window: Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<F>(window: Window, mut on_frame: F) -> SetupResult<Self>
    where
        F: FnMut() -> bool + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let next = callback.clone();
        let win = window.clone();
        let queued = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            queued.set(None);
            if !on_frame() {
                return;
            }
            if let Some(cb) = next.borrow().as_ref() {
                if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    queued.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        let frame_loop = Self {
            window,
            callback,
            pending,
        };
        frame_loop.schedule()?;
        Ok(frame_loop)
    }

    fn schedule(&self) -> SetupResult<()> {
        if let Some(cb) = self.callback.borrow().as_ref() {
            let id = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(SetupError::js)?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    /// Cancel the queued frame and release the closure. Idempotent.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
