//! Host capabilities the trail renders through
//!
//! The core never touches a document. The embedding application supplies a
//! tweening library, the SVG surface and the body marker classes by
//! implementing these traits.

use serde::Serialize;

use crate::spline::GradientLine;

/// Elements the tweening host can address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// The cursor visual
    Cursor,
}

/// Property bag for `Tweener::set` / `Tweener::to`
///
/// Serializes to the camelCase object GSAP-style libraries take.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
    /// Tween length in seconds (`to` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    /// Easing name (`to` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,
}

/// GSAP-like tweening library
pub trait Tweener {
    /// Apply properties immediately
    fn set(&mut self, target: TweenTarget, props: &TweenProps);

    /// Animate toward properties. Hosts without tweening snap.
    fn to(&mut self, target: TweenTarget, props: &TweenProps) {
        self.set(target, props);
    }
}

/// The vector graphic the trail is drawn into
pub trait TrailSurface {
    /// Replace the trail path's `d` attribute
    fn set_path_data(&mut self, d: &str);

    /// Reposition the gradient axis
    fn set_gradient(&mut self, line: &GradientLine);

    /// Resize the coordinate space to `0 0 width height`
    fn set_view_box(&mut self, width: f32, height: f32);
}

/// Document-level marker classes read by the stylesheet
pub trait MarkerClasses {
    /// Add (`on`) or remove a class on the document body
    fn set_class(&mut self, name: &str, on: bool);
}

/// Everything a `CursorTrail` needs from its host
pub trait TrailHost: Tweener + TrailSurface + MarkerClasses {}

impl<T: Tweener + TrailSurface + MarkerClasses> TrailHost for T {}
