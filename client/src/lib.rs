//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! This crate contains the page, its section components, local view state,
//! static profile content and the contact relay client. The server crate
//! renders it with SSR; the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
