//! Featured projects with their technology tags.

use leptos::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::content::{PROJECTS, Section};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section section--projects" aria-labelledby="projects-heading">
            <FloatingShapes/>

            <header class="section__header">
                <h2 id="projects-heading" class="section__title reveal">
                    <span class="section__title-chip">
                        "Featured " <span class="section__title-accent">"Projects"</span>
                    </span>
                </h2>
            </header>

            <ul class="card-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <li class="glass-card card-grid__item reveal">
                                <article>
                                    <header class="card-grid__header">
                                        <div class="card-grid__icon" aria-label=project.title>
                                            {project.icon.glyph()}
                                        </div>
                                        <h3 class="card-grid__title">{project.title}</h3>
                                    </header>
                                    <p class="card-grid__body">{project.description}</p>
                                    <ul class="tag-list">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|tech| view! { <li class="tag-list__tag">{*tech}</li> })
                                            .collect_view()}
                                    </ul>
                                </article>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
