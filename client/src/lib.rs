//! # client
//!
//! Leptos + WASM frontend for the GearUp Repairs marketplace.
//!
//! This crate contains pages, components, session state, the REST wire types
//! and the browser glue. Pure logic (route guard, auth bootstrap, payment
//! watcher, wire types) compiles without features so it can be unit tested
//! natively; everything that touches the browser sits behind `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
