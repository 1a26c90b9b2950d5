//! Paperdesk - portfolio site
//!
//! Server-rendered pages with client-side interactions (paper desk, wave
//! headings, accordions, textile canvas, page-to-page navigation), an email
//! signup endpoint and a security header layer. Built with Leptos and
//! WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
