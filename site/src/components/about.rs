use leptos::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::content::{ABOUT_PARAGRAPHS, Section};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section section--textured" aria-labelledby="about-heading">
            <FloatingShapes/>

            <header class="section__header">
                <h2 id="about-heading" class="section__title reveal">
                    <span class="section__title-chip">
                        "About " <span class="section__title-accent">"Me"</span>
                    </span>
                </h2>
            </header>

            <div class="glass-card about-card reveal">
                <p class="about-card__lead">
                    "👋 Hello! I'm" <span class="about-card__name">" Dancan"</span> ", a passionate"
                    <em class="about-card__role">" frontend and MERN stack developer "</em>
                    "who thrives on building beautiful and functional web experiences."
                </p>
                {ABOUT_PARAGRAPHS
                    .iter()
                    .map(|text| view! { <p class="about-card__body">{*text}</p> })
                    .collect_view()}
                <p class="about-card__closing">
                    "Let’s bring your vision to life — one line of code at a time. 🚀"
                </p>
            </div>
        </section>
    }
}
