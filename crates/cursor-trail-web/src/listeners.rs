//! Event listener bookkeeping

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::{SetupError, SetupResult};

struct Registration {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Owns every registered closure until `detach`
#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    /// Register a passive listener
    pub fn add<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> SetupResult<()>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(SetupError::js)?;

        self.registrations.push(Registration {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Remove every listener and drop its closure
    pub fn detach(&mut self) {
        for reg in self.registrations.drain(..) {
            let callback = reg.callback.as_ref().unchecked_ref();
            let _ = reg.target.remove_event_listener_with_callback(reg.event, callback);
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}
