//! # gestiones-client
//!
//! Leptos + WASM front end for the expedientes/indicios case-management
//! system. The backend REST API owns persistence and authorization; this
//! crate owns the browser session, the login exchange, role-gated routing
//! and the list/review screens.
//!
//! The session store, auth gateway and guards are plain Rust and build
//! natively as well, so the operator CLI and the test suite reuse them
//! without a browser.

pub mod app;
pub mod components;
pub mod config;
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
