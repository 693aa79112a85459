//! "What I Offer" grid.

use leptos::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::content::{SERVICES, Section};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="section section--services" aria-labelledby="services-heading">
            <FloatingShapes/>

            <header class="section__header">
                <h2 id="services-heading" class="section__title reveal">
                    <span class="section__title-chip">
                        "What I " <span class="section__title-accent">"Offer"</span>
                    </span>
                </h2>
            </header>

            <ul class="card-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <li class="glass-card card-grid__item reveal">
                                <article>
                                    <header class="card-grid__header">
                                        <div class="card-grid__icon">{service.icon.glyph()}</div>
                                        <h3 class="card-grid__title">{service.title}</h3>
                                    </header>
                                    <p class="card-grid__body">{service.description}</p>
                                </article>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
