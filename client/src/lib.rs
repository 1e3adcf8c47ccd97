//! # client
//!
//! Leptos + WASM frontend for the admin console: the public home and support
//! chat pages, and the gated `/dashboard` area for processes, announcements,
//! FAQs and chat records.
//!
//! Session state comes from the `session` crate. This crate adds the browser
//! cookie store, REST helpers that attach the bearer credential, and the
//! in-page gate wiring for protected views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
