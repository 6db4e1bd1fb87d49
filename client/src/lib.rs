//! # client
//!
//! Leptos + WASM frontend for the Pich & Safe marketing site.
//!
//! This crate contains the five site pages, their shared components, the
//! static page content, the contact form submission client, and the theme
//! preference controller that owns the light/dark mode for the whole app.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
