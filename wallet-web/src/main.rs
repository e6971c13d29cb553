//! MetaMask Demo - Leptos Frontend
//!
//! Single-page wallet demo: connect MetaMask, show the active account's
//! balance, send ETH. Everything hard (signing, RPC, nonce and gas
//! management) is delegated to the injected browser extension.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("MetaMask demo starting...");

    // Hide loading screen immediately when WASM loads
    hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::warn!("no document available; cannot hide loading screen");
            return;
        }
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
            html_element.class_list().add_1("hidden").ok();
        }
        // Also set display:none as backup
        loading_element
            .set_attribute("style", "display: none !important;")
            .ok();
        log::info!("loading screen hidden");
    } else {
        log::warn!("loading element with id 'leptos-loading' not found");
    }
}
