//! # client
//!
//! Leptos + WASM console for a product catalog: a storefront with category
//! filters and a cart, and an admin page for product and category CRUD
//! against the catalog REST API.
//!
//! Views live in `pages` and `components`; the request sequences they
//! trigger live in `actions`, written against the `Transport` and `Dialogs`
//! traits so they can be tested without a browser.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
