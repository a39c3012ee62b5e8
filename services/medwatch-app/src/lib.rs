//! MedWatch Dashboard - Leptos frontend
//!
//! Reactive web UI for the hospital patient monitoring dashboard.

pub mod api;
pub mod app;
pub mod components;
pub mod selection;

pub use app::App;

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
