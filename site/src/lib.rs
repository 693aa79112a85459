//! # site
//!
//! Leptos + WASM frontend for the SimplizerPro single-page site.
//!
//! This crate contains the page sections, the theme and contact state
//! machines, the email relay client, and the browser adapters they use. The
//! `ssr` feature renders it from the `simplizer` server; the `hydrate`
//! feature builds the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
