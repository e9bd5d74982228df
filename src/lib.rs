//! # projects-client
//!
//! Leptos + WASM single-page client for signing up, logging in, and managing
//! projects against a remote REST API.
//!
//! This crate contains pages, components, session state, and the HTTP layer.
//! Browser glue (localStorage, `fetch`, timers, mounting) sits behind the
//! `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
