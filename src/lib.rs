//! # agropredictor
//!
//! Leptos + WASM frontend for the AgroPredictor smart-farming dashboard.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the external prediction/weather/chat service. All browser-only
//! code is gated behind the `csr` feature so the state and parsing layers
//! compile and test on the native target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
