//! # catalog-ui
//!
//! Leptos + WASM frontend pieces for the metadata catalog's My Data page.
//!
//! The centerpiece is the Recently Viewed widget: it reads the visit
//! history once on mount, projects each visit into a labelled row, and
//! renders the rows as links to entity pages. The crate also carries the
//! widget host page, the entity page that records visits, and the ambient
//! pieces they share (config, localized strings, browser storage glue).

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
