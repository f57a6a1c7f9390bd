//! Cursor Trail for the browser
//!
//! Binds the `cursor-trail` renderer to page markup, drives it from
//! `requestAnimationFrame` and moves the cursor visual through GSAP.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { init_cursor_trail } from './cursor_trail_web.js';
//!
//! await init();
//! const trail = init_cursor_trail(JSON.stringify({ positionLerp: 0.3 }));
//! // later
//! trail?.destroy();
//! ```
//!
//! Nothing runs until `init_cursor_trail` is called, so embedders decide
//! when the page is ready.

mod config;
mod dom;
mod error;
mod frame_loop;
mod gsap;
mod host;
mod listeners;
mod observer;
mod session;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub use config::{HostSelectors, WebConfig};
pub use error::{SetupError, SetupResult};

use session::Session;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn debug(s: &str);
}

/// Handle to a running trail
#[wasm_bindgen]
pub struct CursorTrailHandle {
    session: Rc<Session>,
}

#[wasm_bindgen]
impl CursorTrailHandle {
    /// Stop the frame loop, remove listeners and clear the body classes
    pub fn destroy(&self) {
        self.session.teardown();
    }

    /// Pointer is inside a hot zone
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.session.is_active()
    }

    /// False once destroyed or the cursor element left the page
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.session.is_running()
    }

    /// Last drawn frame (path data, gradient axis, cursor transform)
    pub fn frame_json(&self) -> String {
        self.session.frame_json()
    }

    /// Effective trail tunables
    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.session.config()).unwrap_or_else(|_| "{}".into())
    }
}

/// Attach the cursor trail to the current page.
///
/// Returns `None` when the device has no hovering fine pointer, the markup
/// or GSAP is missing, or `config_json` is invalid. Everything but the
/// pointer check is reported with a console warning; an unsupported
/// pointer only goes to `console.debug`.
#[wasm_bindgen]
pub fn init_cursor_trail(config_json: Option<String>) -> Option<CursorTrailHandle> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    match start(config_json.as_deref()) {
        Ok(session) => Some(CursorTrailHandle { session }),
        Err(err) if err.is_silent() => {
            debug(&format!("[cursor-trail] not started: {}", err));
            None
        }
        Err(err) => {
            warn(&format!("[cursor-trail] {}", err));
            None
        }
    }
}

fn start(config_json: Option<&str>) -> SetupResult<Rc<Session>> {
    let config = WebConfig::from_json(config_json)?;
    Session::start(config)
}
