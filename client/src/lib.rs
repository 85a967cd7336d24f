//! # authflow-client
//!
//! Leptos + WASM frontend for the AuthFlow login and profile flow.
//!
//! This crate contains the session store, the login and details form
//! controllers, pages, components, and the REST client for the two backend
//! endpoints. Controller logic is plain Rust and compiles natively; browser
//! glue sits behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
