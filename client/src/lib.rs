//! # client
//!
//! Leptos + WASM admin dashboard for the project/finance platform.
//!
//! This crate contains pages, components, application state, the REST API
//! layer, and the socket lifecycle. State modules are plain data plus async
//! flows generic over the API traits in [`net::api`], so they run natively
//! under `cargo test` without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
