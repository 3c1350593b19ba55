//! # socialstack-client
//!
//! Leptos + WASM frontend for the Social Stack demo network.
//!
//! This crate owns the browser session lifecycle: persisted access/refresh
//! tokens, the expiry check, silent refresh, the once-per-mount auth gate and
//! the route guard that decides between protected and public pages. Pages and
//! components are a thin shell over that layer. With `ssr` the crate also
//! provides the Axum host that renders the shell for hydration.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs browser logging and hydrates the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
