//! PageKit - browser enhancements for a static page
//!
//! Loaded as WebAssembly by the page. On start it wires dropdown menus,
//! smooth scrolling for in-page anchors, the toast animation stylesheet and
//! the review carousel. The page calls `copyText(text)` to copy with a
//! notification.

mod carousel;
mod clipboard;
mod config;
mod dom;
mod dropdown;
mod notify;
mod page;
mod scroll;
mod styles;

use wasm_bindgen::prelude::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Module start: logging, panic hook, then wiring once the DOM is parsed.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("PageKit {} starting...", env!("GIT_VERSION"));

    if let Err(e) = page::boot_when_ready() {
        log::error!("Page enhancements not started: {e}");
    }
}

/// Copy `text` to the clipboard and show the outcome as a toast.
///
/// Anything that is not a non-empty string shows the "nothing to copy" message.
#[wasm_bindgen(js_name = copyText)]
pub fn copy_text(text: JsValue) {
    clipboard::copy_and_notify(text.as_string());
}
