//! Web server and sign-in UI for the PDF accessibility remediation portal.
//!
//! The crate builds twice: with `ssr` it is the axum server that renders the
//! Leptos app and runs the OIDC flow, with `hydrate` it is the WASM bundle
//! that takes over the rendered page in the browser.

#![allow(non_snake_case)]

pub mod app;
pub mod auth_state;
pub mod branding;
pub mod components;
pub mod pages;
pub mod types;
pub mod user;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod server_helpers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
