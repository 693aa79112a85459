//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{
    about::About, contact::Contact, hero::Hero, navbar::Navbar, projects::Projects, services::Services,
};
use crate::config::SiteConfig;
use crate::content::BRAND_NAME;
use crate::state::theme::ThemePreference;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/logo.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The theme signal starts at `Light` so server and client render the same
/// markup; the stored preference is restored once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemePreference::default());
    provide_context(theme);
    provide_context(SiteConfig::from_build_env());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        theme.set(crate::util::dark_mode::browser_controller().restore());
        crate::util::animation::reveal_on_scroll();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/simplizer.css"/>
        <Title text=BRAND_NAME/>

        <main class="page">
            <Navbar/>
            <Hero/>
            <About/>
            <Services/>
            <Projects/>
            <Contact/>
        </main>
    }
}
