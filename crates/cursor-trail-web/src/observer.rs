//! Watches the document for the cursor element being removed

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit};

use crate::error::{SetupError, SetupResult};

/// Fires `on_removed` once, the first time `host` is found disconnected
pub struct RemovalObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl RemovalObserver {
    pub fn watch<F>(document: &Document, host: Element, mut on_removed: F) -> SetupResult<Self>
    where
        F: FnMut() + 'static,
    {
        let mut fired = false;
        let on_mutation = move |_records: js_sys::Array, observer: MutationObserver| {
            if fired || host.is_connected() {
                return;
            }
            fired = true;
            observer.disconnect();
            on_removed();
        };
        let callback =
            Closure::wrap(Box::new(on_mutation) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer =
            MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(SetupError::js)?;
        let root = document.document_element().ok_or(SetupError::NoDocument)?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(&root, &init).map_err(SetupError::js)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RemovalObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
