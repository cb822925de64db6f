//! # crosstab-client
//!
//! Leptos + WASM frontend for building cross-tabulations of an uploaded
//! `.sav` dataset. The user picks row and column variables, chooses which
//! statistics to compute, and the server answers with one or more tables
//! that are rendered here.
//!
//! `state` holds the whole page model and a pure event dispatcher, `net` the
//! HTTP calls and wire schema, `components`/`pages` the Leptos views.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
