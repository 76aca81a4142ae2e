//! # inspitap
//!
//! Leptos + WASM single-screen app showing one motivational quote per day.
//!
//! The daily pick, language, and theme live in cookies (`storage`). The
//! `controller` resolves today's quote, rotates it at local midnight, and
//! owns the timers and listeners the screen needs; `components` renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod quotes;
pub mod state;
pub mod storage;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
