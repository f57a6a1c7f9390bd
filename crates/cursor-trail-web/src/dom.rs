//! Page lookups: markup the trail binds to and the pointer media queries

use cursor_trail::PointerCapability;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::HostSelectors;
use crate::error::{SetupError, SetupResult};

/// Elements resolved from `HostSelectors`
pub struct DomTargets {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub hot_zones: Vec<Element>,
    pub suppress_zones: Vec<Element>,
    pub cursor: Element,
    pub trail_canvas: Element,
    pub trail_path: Element,
    pub gradient: Option<Element>,
}

impl DomTargets {
    /// Resolve every selector against the current document.
    ///
    /// The cursor, SVG and path are required and at least one hot zone
    /// must exist. The gradient and suppress zones are optional.
    pub fn query(selectors: &HostSelectors) -> SetupResult<Self> {
        let window = web_sys::window().ok_or(SetupError::NoDocument)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let body = document.body().ok_or(SetupError::NoDocument)?;

        let cursor = required(&document, &selectors.cursor)?;
        let trail_canvas = required(&document, &selectors.trail_canvas)?;
        let trail_path = required(&document, &selectors.trail_path)?;
        let gradient = optional(&document, &selectors.gradient)?;

        let hot_zones = all(&document, &selectors.hot_zones)?;
        if hot_zones.is_empty() {
            return Err(SetupError::NoHotZones(selectors.hot_zones.clone()));
        }
        let suppress_zones = all(&document, &selectors.suppress_zones)?;

        Ok(Self {
            window,
            document,
            body,
            hot_zones,
            suppress_zones,
            cursor,
            trail_canvas,
            trail_path,
            gradient,
        })
    }
}

/// Read `(hover: hover)` and `(pointer: fine)`
pub fn pointer_capability(window: &Window) -> PointerCapability {
    PointerCapability {
        can_hover: media_matches(window, "(hover: hover)"),
        fine_pointer: media_matches(window, "(pointer: fine)"),
    }
}

/// Current inner size of the window, if the browser reports one
pub fn window_size(window: &Window) -> Option<(f32, f32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

fn optional(document: &Document, selector: &str) -> SetupResult<Option<Element>> {
    if selector.is_empty() {
        return Ok(None);
    }
    document
        .query_selector(selector)
        .map_err(|e| SetupError::selector(selector, e))
}

fn required(document: &Document, selector: &str) -> SetupResult<Element> {
    optional(document, selector)?.ok_or_else(|| SetupError::MissingElement(selector.to_string()))
}

fn all(document: &Document, selector: &str) -> SetupResult<Vec<Element>> {
    if selector.is_empty() {
        return Ok(Vec::new());
    }
    let list = document
        .query_selector_all(selector)
        .map_err(|e| SetupError::selector(selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn test_missing_cursor_is_reported() {
        let root = mount(r#"<section data-cursor></section>"#);
        let err = DomTargets::query(&HostSelectors::default()).err().unwrap();
        assert!(matches!(err, SetupError::MissingElement(ref s) if s == "#cursor-hijack"));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_resolves_markup() {
        let root = mount(
            r#"<section data-cursor></section><section data-cursor></section>
               <div id="cursor-hijack"></div>
               <svg id="cursor-trail-canvas"><path id="cursor-trail-path"></path></svg>"#,
        );
        let targets = DomTargets::query(&HostSelectors::default()).unwrap();
        assert_eq!(targets.hot_zones.len(), 2);
        assert!(targets.gradient.is_none());
        assert!(targets.suppress_zones.is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_bad_selector_is_an_error() {
        let selectors = HostSelectors {
            cursor: "##".to_string(),
            ..Default::default()
        };
        let err = DomTargets::query(&selectors).err().unwrap();
        assert!(matches!(err, SetupError::Selector { .. }));
    }
}
