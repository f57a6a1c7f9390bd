//! `TrailHost` over live DOM elements

use cursor_trail::{GradientLine, MarkerClasses, TrailSurface, TweenProps, TweenTarget, Tweener};
use web_sys::{Element, HtmlElement};

use crate::dom::DomTargets;
use crate::gsap::GsapTweener;

/// Renders frames into the page
pub struct DomHost {
    tweener: GsapTweener,
    canvas: Element,
    path: Element,
    gradient: Option<Element>,
    body: HtmlElement,
}

impl DomHost {
    pub fn new(tweener: GsapTweener, targets: &DomTargets) -> Self {
        Self {
            tweener,
            canvas: targets.trail_canvas.clone(),
            path: targets.trail_path.clone(),
            gradient: targets.gradient.clone(),
            body: targets.body.clone(),
        }
    }
}

impl Tweener for DomHost {
    fn set(&mut self, target: TweenTarget, props: &TweenProps) {
        self.tweener.set(target, props);
    }

    fn to(&mut self, target: TweenTarget, props: &TweenProps) {
        self.tweener.to(target, props);
    }
}

// Attribute writes only fail on invalid names, which are fixed here
impl TrailSurface for DomHost {
    fn set_path_data(&mut self, d: &str) {
        let _ = self.path.set_attribute("d", d);
    }

    fn set_gradient(&mut self, line: &GradientLine) {
        let Some(gradient) = &self.gradient else {
            return;
        };
        let _ = gradient.set_attribute("x1", &line.from.x.to_string());
        let _ = gradient.set_attribute("y1", &line.from.y.to_string());
        let _ = gradient.set_attribute("x2", &line.to.x.to_string());
        let _ = gradient.set_attribute("y2", &line.to.y.to_string());
    }

    fn set_view_box(&mut self, width: f32, height: f32) {
        let _ = self
            .canvas
            .set_attribute("viewBox", &format!("0 0 {} {}", width, height));
    }
}

impl MarkerClasses for DomHost {
    fn set_class(&mut self, name: &str, on: bool) {
        let _ = self.body.class_list().toggle_with_force(name, on);
    }
}
