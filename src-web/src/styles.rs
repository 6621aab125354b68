//! One-time injection of the toast keyframes.

use pagekit_types::models::StyleConfig;
use pagekit_types::styles::TOAST_KEYFRAMES;
use pagekit_types::DomError;
use web_sys::{Document, HtmlElement, Node};

use crate::dom;

/// Insert the animation stylesheet unless the marker element already exists.
///
/// Returns whether a node was inserted.
pub(crate) fn inject(document: &Document, config: &StyleConfig) -> Result<bool, DomError> {
    if document.get_element_by_id(&config.marker_id).is_some() {
        return Ok(false);
    }

    let style: HtmlElement = dom::create(document, "style")?;
    style.set_id(&config.marker_id);
    style.set_text_content(Some(TOAST_KEYFRAMES));

    let parent: Node = match document.head() {
        Some(head) => head.into(),
        None => document.body().ok_or(DomError::NoBody)?.into(),
    };
    parent.append_child(&style).map_err(|e| DomError::js("append style", &e))?;
    Ok(true)
}
