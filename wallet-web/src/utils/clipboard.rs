//! Clipboard helper
//!
//! Thin wrapper over `navigator.clipboard.writeText`. The write is
//! async; the caller shows its confirmation notice optimistically and a
//! failure is only logged.

use wasm_bindgen_futures::JsFuture;

/// Copy `text` to the system clipboard.
pub fn copy_text(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(text);
    leptos::task::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("clipboard write failed: {e:?}");
        }
    });
}
