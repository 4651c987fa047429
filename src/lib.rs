//! # plantcare-client
//!
//! Leptos + WASM frontend for the PlantCare plant-health application.
//!
//! The app is a browser SPA with three routes: a public landing page, a
//! combined sign-in/sign-up page, and a dashboard gated on the client-side
//! session. Session state lives in [`state::session`] and is mirrored to
//! `localStorage` so a reload does not force a fresh sign-in; the gate in
//! [`util::gate`] decides what a protected route may render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
