//! Page configuration lookup.
//!
//! Sources, first hit wins:
//! 1. `window.pagekitConfig` (plain object)
//! 2. `<script type="application/json" id="pagekit-config">`
//! 3. built-in defaults

use pagekit_types::{ConfigError, PageConfig};
use wasm_bindgen::JsValue;
use web_sys::Window;

const GLOBAL_KEY: &str = "pagekitConfig";
const SCRIPT_ID: &str = "pagekit-config";

/// Load the page config, falling back to defaults on any problem.
pub(crate) fn load(window: &Window) -> PageConfig {
    match read(window) {
        Ok(Some(config)) => {
            log::debug!("Loaded page config");
            config
        }
        Ok(None) => PageConfig::default(),
        Err(e) => {
            log::warn!("Invalid page config, using defaults: {e}");
            PageConfig::default()
        }
    }
}

fn read(window: &Window) -> Result<Option<PageConfig>, ConfigError> {
    let global = js_sys::Reflect::get(window, &JsValue::from_str(GLOBAL_KEY)).unwrap_or(JsValue::UNDEFINED);
    if !global.is_undefined() && !global.is_null() {
        let config: PageConfig = serde_wasm_bindgen::from_value(global)
            .map_err(|e| ConfigError::ParseError { message: e.to_string() })?;
        return config.validated().map(Some);
    }

    let Some(script) = window.document().and_then(|d| d.get_element_by_id(SCRIPT_ID)) else {
        return Ok(None);
    };
    let raw = script.text_content().unwrap_or_default();
    PageConfig::from_json(&raw).map(Some)
}
