//! Decorative float animation.
//!
//! Sections only ask for "a repeating eased offset on these nodes" through
//! [`Animator`]; the browser implementation hands the work to a CSS
//! `@keyframes float` rule parameterised by custom properties. No page state
//! depends on how or whether the motion runs.
//!
//! Section content marked with [`REVEAL_CLASS`] fades in once, the first time
//! it scrolls into view. [`reveal_on_scroll`] arms this after hydration; until
//! then the stylesheet plays the fade at load so the server-rendered page is
//! never left hidden.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::time::Duration;

/// A yoyo vertical float between two offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub from_px: f64,
    pub to_px: f64,
    pub duration: Duration,
    /// Scale reached at `to_px`.
    pub scale: f64,
}

impl FloatMotion {
    /// Background shapes behind section content.
    pub const GENTLE: Self = Self { from_px: -10.0, to_px: 10.0, duration: Duration::from_secs(4), scale: 1.0 };

    /// Hero shapes: drift down and swell slightly.
    pub const DRIFT: Self = Self { from_px: 0.0, to_px: 20.0, duration: Duration::from_secs(4), scale: 1.05 };

    /// CSS declarations that drive the `float` keyframes for this motion.
    #[must_use]
    pub fn css_declarations(&self) -> [(&'static str, String); 4] {
        [
            ("--float-from", format!("{}px", self.from_px)),
            ("--float-to", format!("{}px", self.to_px)),
            ("--float-scale", self.scale.to_string()),
            (
                "animation",
                format!("float {}ms ease-in-out infinite alternate", self.duration.as_millis()),
            ),
        ]
    }
}

/// Applies a repeating eased offset to a set of nodes.
pub trait Animator {
    type Node;

    fn float(&self, nodes: &[Self::Node], motion: &FloatMotion);
}

/// Writes the motion onto each element's inline style.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct CssAnimator;

#[cfg(feature = "hydrate")]
impl Animator for CssAnimator {
    type Node = web_sys::HtmlElement;

    fn float(&self, nodes: &[Self::Node], motion: &FloatMotion) {
        let declarations = motion.css_declarations();
        for node in nodes {
            let style = node.style();
            for (name, value) in &declarations {
                let _ = style.set_property(name, value);
            }
        }
    }
}

/// Marks content that fades in on first view.
pub const REVEAL_CLASS: &str = "reveal";
/// Added to a revealed node; starts its fade.
pub const REVEALED_CLASS: &str = "is-revealed";
/// Added to `<html>` once scroll reveals are observed.
pub const REVEAL_ARMED_CLASS: &str = "reveal-armed";
/// Fraction of a node that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Nodes from an intersection batch that just came into view.
pub fn entered_view<T>(entries: impl IntoIterator<Item = (T, bool)>) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|(node, intersecting)| intersecting.then_some(node))
        .collect()
}

/// Observe every `.reveal` node and reveal each one the first time it enters
/// the viewport. The observer lives for the rest of the page.
#[cfg(feature = "hydrate")]
pub fn reveal_on_scroll() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .map(|e| (e.target(), e.is_intersecting()));
            for target in entered_view(batch) {
                let _ = target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(&target);
            }
        },
    );
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("reveal: IntersectionObserver unavailable: {e:?}");
                return;
            }
        };
    callback.forget();

    let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.class_list().add_1(REVEAL_ARMED_CLASS);
    }
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
}
