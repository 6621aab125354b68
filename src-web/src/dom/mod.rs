//! Thin helpers over `web-sys` lookups.
//!
//! Everything returns [`DomError`] instead of throwing so callers can log and
//! keep going.

mod listener;
#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing;

pub(crate) use listener::Listener;

use pagekit_types::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub(crate) fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// All matches of `selector` that are a `T`, in document order.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, DomError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| DomError::js(format!("querySelectorAll({selector})"), &e))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// First match of `selector`, if it is a `T`.
pub(crate) fn query_one<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, DomError> {
    let found = document
        .query_selector(selector)
        .map_err(|e| DomError::js(format!("querySelector({selector})"), &e))?;
    Ok(found.and_then(|element| element.dyn_into::<T>().ok()))
}

/// `document.createElement(tag)` cast to the expected element type.
pub(crate) fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, DomError> {
    document
        .create_element(tag)
        .map_err(|e| DomError::js(format!("createElement({tag})"), &e))?
        .dyn_into::<T>()
        .map_err(|e| DomError::js(format!("cast <{tag}>"), &e))
}
