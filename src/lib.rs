//! Pixelforge landing site
//!
//! Marketing landing page for the Pixelforge browser-based editor, rendered
//! on the server and hydrated in the browser with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
