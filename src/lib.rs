//! # storefront-web
//!
//! Leptos + WASM front end for the storefront's contact surface: the
//! email-us form with server-side validation feedback and transient alerts,
//! plus the scroll-driven affordances (back-to-top, scroll-position
//! preservation across modals).
//!
//! The submission and notification protocol lives in framework-free structs
//! under [`state`]; components and pages are thin Leptos adapters on top, and
//! all browser-only code is gated behind the `hydrate` feature so the crate
//! tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
