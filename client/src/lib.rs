//! Natura browser client: the public magazine pages and the admin surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! All content lives in the visitor's `localStorage`. The `content` crate
//! owns the data model and every rule about loading, editing, and
//! persisting it; this crate wires those types into Leptos signals and
//! renders them. The server only ships the SSR shell and the WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
