//! # library-client
//!
//! Leptos CSR browser client for the library management backend: page
//! routing with a login/role guard, a persisted auth session, and thin
//! wrappers around the REST endpoints (books, borrowing, reservations, fines,
//! notifications, users, branches).
//!
//! Everything except the browser glue (fetch transport, `localStorage`,
//! mounting) builds natively, so the session, guard and HTTP classification
//! logic are unit-tested without a browser.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::mount_to_body(app::App);
}
