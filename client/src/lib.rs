//! # client
//!
//! Leptos + WASM frontend for the Dishcovery recipe search page.
//!
//! This crate contains the page, its components, and the local state behind
//! the search card. It is rendered on the server by the `dishcovery` binary
//! (`ssr` feature) and hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Browser entry point: install panic/console hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
