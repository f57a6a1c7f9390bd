//! A live trail attached to the page

use std::cell::RefCell;
use std::rc::Rc;

use cursor_trail::{CursorTrail, TrailConfig};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::config::WebConfig;
use crate::dom::{self, DomTargets};
use crate::error::{SetupError, SetupResult};
use crate::frame_loop::FrameLoop;
use crate::gsap::GsapTweener;
use crate::host::DomHost;
use crate::listeners::Listeners;
use crate::observer::RemovalObserver;

type SharedTrail = Rc<RefCell<CursorTrail<DomHost>>>;

/// Renderer plus every browser resource it holds
pub struct Session {
    trail: SharedTrail,
    listeners: RefCell<Listeners>,
    frame_loop: RefCell<Option<FrameLoop>>,
    observer: RefCell<Option<RemovalObserver>>,
}

impl Session {
    /// Check the device, bind the markup and start the frame loop
    pub fn start(config: WebConfig) -> SetupResult<Rc<Self>> {
        let window = web_sys::window().ok_or(SetupError::NoDocument)?;
        let capability = dom::pointer_capability(&window);
        if !capability.supports_trail() {
            return Err(SetupError::UnsupportedPointer);
        }

        let targets = DomTargets::query(&config.selectors)?;
        let tweener = GsapTweener::find(targets.cursor.clone())?;
        let host = DomHost::new(tweener, &targets);
        let trail: SharedTrail = Rc::new(RefCell::new(CursorTrail::new(
            config.trail,
            capability,
            host,
        )?));
        sync_viewport(&window, &trail);

        let listeners = bind_listeners(&targets, &trail)?;
        crate::debug(&format!(
            "[cursor-trail] attached: {} hot zones, {} listeners",
            targets.hot_zones.len(),
            listeners.len()
        ));

        let frame_loop = FrameLoop::start(window, {
            let trail = trail.clone();
            move || {
                let mut trail = trail.borrow_mut();
                trail.tick();
                trail.is_running()
            }
        })?;

        let session = Rc::new(Self {
            trail,
            listeners: RefCell::new(listeners),
            frame_loop: RefCell::new(Some(frame_loop)),
            observer: RefCell::new(None),
        });

        let weak = Rc::downgrade(&session);
        let observer = RemovalObserver::watch(&targets.document, targets.cursor, move || {
            if let Some(session) = weak.upgrade() {
                session.teardown();
            }
        })?;
        *session.observer.borrow_mut() = Some(observer);

        Ok(session)
    }

    /// Stop the frame loop and release listeners. Safe to call repeatedly.
    pub fn teardown(&self) {
        if let Ok(mut trail) = self.trail.try_borrow_mut() {
            if trail.is_running() {
                crate::debug("[cursor-trail] detached");
            }
            trail.host_removed();
        }
        if let Some(frame_loop) = self.frame_loop.borrow_mut().take() {
            frame_loop.stop();
        }
        if let Ok(mut listeners) = self.listeners.try_borrow_mut() {
            listeners.detach();
        }
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer.disconnect();
        }
    }

    pub fn is_active(&self) -> bool {
        self.trail.borrow().is_active()
    }

    pub fn is_running(&self) -> bool {
        self.trail.borrow().is_running()
    }

    pub fn config(&self) -> TrailConfig {
        self.trail.borrow().engine().config().clone()
    }

    /// Last drawn frame as JSON, `null` before the first one
    pub fn frame_json(&self) -> String {
        serde_json::to_string(&self.trail.borrow().last_frame()).unwrap_or_else(|_| "null".into())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn sync_viewport(window: &Window, trail: &SharedTrail) {
    if let Some((width, height)) = dom::window_size(window) {
        trail.borrow_mut().resize(width, height);
    }
}

fn bind_listeners(targets: &DomTargets, trail: &SharedTrail) -> SetupResult<Listeners> {
    let mut listeners = Listeners::default();

    let t = trail.clone();
    listeners.add(&targets.window, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            t.borrow_mut()
                .pointer_moved(event.client_x() as f32, event.client_y() as f32);
        }
    })?;

    let t = trail.clone();
    let window = targets.window.clone();
    listeners.add(&targets.window, "resize", move |_| sync_viewport(&window, &t))?;

    for zone in &targets.hot_zones {
        let t = trail.clone();
        listeners.add(zone, "mouseenter", move |_| t.borrow_mut().activate())?;
        let t = trail.clone();
        listeners.add(zone, "mouseleave", move |_| t.borrow_mut().deactivate())?;
    }

    for zone in &targets.suppress_zones {
        let t = trail.clone();
        listeners.add(zone, "mouseenter", move |_| t.borrow_mut().suppress(true))?;
        let t = trail.clone();
        listeners.add(zone, "mouseleave", move |_| t.borrow_mut().suppress(false))?;
    }

    Ok(listeners)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use cursor_trail::Vec2;
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<section id="zone" data-cursor></section>
               <div id="suppress" class="button-wrapper"></div>
               <div id="cursor-hijack"></div>
               <svg id="cursor-trail-canvas"><path id="cursor-trail-path"></path></svg>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();

        let gsap = Object::new();
        let noop = Function::new_no_args("");
        Reflect::set(&gsap, &"set".into(), &noop).unwrap();
        Reflect::set(&gsap, &"to".into(), &noop).unwrap();
        Reflect::set(&js_sys::global(), &"gsap".into(), &gsap).unwrap();
        root
    }

    /// `None` when the test browser reports a coarse pointer
    fn start() -> Option<Rc<Session>> {
        match Session::start(WebConfig::default()) {
            Ok(session) => Some(session),
            Err(SetupError::UnsupportedPointer) => None,
            Err(err) => panic!("unexpected setup error: {}", err),
        }
    }

    fn dispatch(target: &Element, event: &str) {
        target.dispatch_event(&Event::new(event).unwrap()).unwrap();
    }

    fn find(root: &Element, selector: &str) -> Element {
        root.query_selector(selector).unwrap().unwrap()
    }

    async fn flush_microtasks() {
        JsFuture::from(Promise::resolve(&JsValue::NULL)).await.unwrap();
    }

    fn body_has(class: &str) -> bool {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().class_list().contains(class)
    }

    #[wasm_bindgen_test]
    async fn test_hover_and_host_removal() {
        let root = mount();
        let Some(session) = start() else {
            root.remove();
            return;
        };

        dispatch(&find(&root, "#zone"), "mouseenter");
        assert!(session.is_active());
        assert!(body_has("cursor-active"));

        find(&root, "#cursor-hijack").remove();
        flush_microtasks().await;

        assert!(!session.is_running());
        assert!(!body_has("cursor-active"));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_mousemove_updates_pointer() {
        let root = mount();
        let Some(session) = start() else {
            root.remove();
            return;
        };

        let init = MouseEventInit::new();
        init.set_client_x(120);
        init.set_client_y(80);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
        let window = web_sys::window().unwrap();
        window.dispatch_event(&event).unwrap();

        assert_eq!(session.trail.borrow().engine().pointer(), Vec2::new(120.0, 80.0));
        session.teardown();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_resize_rewrites_view_box() {
        let root = mount();
        let Some(session) = start() else {
            root.remove();
            return;
        };

        let canvas = find(&root, "#cursor-trail-canvas");
        canvas.set_attribute("viewBox", "0 0 1 1").unwrap();
        let window = web_sys::window().unwrap();
        window.dispatch_event(&Event::new("resize").unwrap()).unwrap();

        let (width, height) = dom::window_size(&window).unwrap();
        assert_eq!(
            canvas.get_attribute("viewBox"),
            Some(format!("0 0 {} {}", width, height))
        );
        session.teardown();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_suppress_zone_toggles_hidden_class() {
        let root = mount();
        let Some(session) = start() else {
            root.remove();
            return;
        };

        dispatch(&find(&root, "#zone"), "mouseenter");
        let suppress = find(&root, "#suppress");
        dispatch(&suppress, "mouseenter");
        assert!(body_has("cursor-hidden"));
        assert!(session.is_active());

        dispatch(&suppress, "mouseleave");
        assert!(!body_has("cursor-hidden"));
        assert!(body_has("cursor-active"));

        session.teardown();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_teardown_is_idempotent() {
        let root = mount();
        if let Some(session) = start() {
            session.teardown();
            session.teardown();
            assert!(!session.is_running());
            assert!(!body_has("cursor-active"));
        }
        root.remove();
    }
}
