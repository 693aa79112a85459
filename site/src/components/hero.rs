//! Landing section with the headline and call to action.

use leptos::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::content::Section;
use crate::util::scroll::scroll_to;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="hero">
            <div class="hero__backdrop"></div>
            <FloatingShapes hero=true/>

            <h1 class="hero__title reveal">
                <span class="hero__accent hero__accent--red">"Building web experiences"</span>
                " that drive results — "
                <span class="hero__accent hero__accent--yellow">"fast, beautiful"</span>
                " and built to grow your "
                <span class="hero__accent hero__accent--green">"business."</span>
            </h1>

            <button class="btn hero__cta reveal" on:click=move |_| scroll_to(Section::Contact)>
                "Get Started"
            </button>
        </section>
    }
}
