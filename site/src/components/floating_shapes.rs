//! Blurred background shapes that float behind section content.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::animation::FloatMotion;

const SHAPE_CLASSES: [&str; 3] = [
    "shape shape--round shape--pink shape--top-left",
    "shape shape--square shape--yellow shape--bottom-right",
    "shape shape--round shape--teal shape--top-right",
];

/// Decorative shape layer. `hero` selects the larger drifting variant.
#[component]
pub fn FloatingShapes(#[prop(optional)] hero: bool) -> impl IntoView {
    let refs: [NodeRef<Div>; 3] = std::array::from_fn(|_| NodeRef::new());
    let motion = if hero { FloatMotion::DRIFT } else { FloatMotion::GENTLE };

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use crate::util::animation::{Animator, CssAnimator};

        let nodes: Vec<web_sys::HtmlElement> = refs
            .iter()
            .filter_map(|r| r.get())
            .map(web_sys::HtmlElement::from)
            .collect();
        if nodes.len() == refs.len() {
            CssAnimator.float(&nodes, &motion);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = motion;

    let layer_class = if hero { "floating-shapes floating-shapes--hero" } else { "floating-shapes" };

    view! {
        <div class=layer_class aria-hidden="true">
            <div node_ref=refs[0] class=SHAPE_CLASSES[0]></div>
            <div node_ref=refs[1] class=SHAPE_CLASSES[1]></div>
            <div node_ref=refs[2] class=SHAPE_CLASSES[2]></div>
        </div>
    }
}
