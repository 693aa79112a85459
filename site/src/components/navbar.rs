//! Fixed top navigation: brand, section links, mobile menu and theme toggle.

use leptos::prelude::*;

use crate::content::{BRAND_NAME, Section};
use crate::state::theme::ThemePreference;
use crate::util::dark_mode::browser_controller;
use crate::util::scroll::scroll_to;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();
    let menu_open = RwSignal::new(false);

    let on_toggle_theme = move |_| {
        let next = browser_controller().toggle_and_apply(theme.get_untracked());
        theme.set(next);
    };

    let is_dark = move || theme.get().is_dark();

    view! {
        <nav class="navbar">
            <div
                class="navbar__brand"
                role="button"
                tabindex="0"
                on:click=move |_| scroll_to(Section::Hero)
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        scroll_to(Section::Hero);
                    }
                }
            >
                <img
                    src="/logo.svg"
                    alt=format!("{BRAND_NAME} Logo")
                    class=move || if is_dark() { "navbar__logo navbar__logo--inverted" } else { "navbar__logo" }
                />
                <span class="navbar__name">{BRAND_NAME}</span>
            </div>

            <ul class="navbar__links">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a href=section.anchor() class="navbar__link">{section.nav_label()}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button
                class="btn navbar__menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile-menu">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.anchor()
                                    class="navbar__link"
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {section.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <button class="btn navbar__theme-toggle" title="Toggle dark mode" on:click=on_toggle_theme>
                {move || if is_dark() { "☀" } else { "☾" }}
            </button>
        </nav>
    }
}
