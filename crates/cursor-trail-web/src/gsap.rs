//! Bridge to the page's GSAP instance

use cursor_trail::{TweenProps, TweenTarget, Tweener};
use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::error::{SetupError, SetupResult};

/// `Tweener` backed by `globalThis.gsap`
pub struct GsapTweener {
    gsap: JsValue,
    set_fn: Function,
    to_fn: Function,
    cursor: Element,
    warned: bool,
}

impl GsapTweener {
    /// Look up GSAP on the global object and bind it to the cursor element
    pub fn find(cursor: Element) -> SetupResult<Self> {
        let gsap = Reflect::get(&js_sys::global(), &"gsap".into()).map_err(SetupError::js)?;
        if gsap.is_undefined() || gsap.is_null() {
            return Err(SetupError::MissingTweenLibrary);
        }
        let set_fn = method(&gsap, "set")?;
        let to_fn = method(&gsap, "to")?;

        Ok(Self {
            gsap,
            set_fn,
            to_fn,
            cursor,
            warned: false,
        })
    }

    fn target(&self, target: TweenTarget) -> &Element {
        match target {
            TweenTarget::Cursor => &self.cursor,
        }
    }

    fn call(&self, func: &Function, target: TweenTarget, props: &TweenProps) -> SetupResult<()> {
        let vars = JSON::parse(&serde_json::to_string(props)?).map_err(SetupError::js)?;
        func.call2(&self.gsap, self.target(target), &vars).map_err(SetupError::js)?;
        Ok(())
    }

    fn report(&mut self, result: SetupResult<()>) {
        // One warning per session; this runs every frame
        if let Err(err) = result {
            if !self.warned {
                self.warned = true;
                crate::warn(&format!("[cursor-trail] tween failed: {}", err));
            }
        }
    }
}

impl Tweener for GsapTweener {
    fn set(&mut self, target: TweenTarget, props: &TweenProps) {
        let result = self.call(&self.set_fn, target, props);
        self.report(result);
    }

    fn to(&mut self, target: TweenTarget, props: &TweenProps) {
        let result = self.call(&self.to_fn, target, props);
        self.report(result);
    }
}

fn method(gsap: &JsValue, name: &str) -> SetupResult<Function> {
    Reflect::get(gsap, &name.into())
        .map_err(SetupError::js)?
        .dyn_into::<Function>()
        .map_err(|_| SetupError::MissingTweenLibrary)
}
