//! # docboard
//!
//! Leptos + WASM dashboard client for an Appwrite-compatible hosted backend.
//! A login/register screen establishes an email/password session against the
//! identity API; the dashboard then lists the documents of two configured
//! collections side by side.
//!
//! This crate contains pages, components, application state, and the backend
//! REST client. Browser-only dependencies are gated behind the `web` feature
//! so the state and protocol logic stays testable with a plain native
//! `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: mounts the app onto `<body>` once the module loads.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
