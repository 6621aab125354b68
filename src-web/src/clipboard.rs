//! Copy to clipboard with a manual fallback.
//!
//! Primary path is `navigator.clipboard.writeText` in a secure context. When
//! that is missing or rejected, an off-screen textarea is selected and
//! `execCommand("copy")` is issued instead.

use js_sys::Reflect;
use pagekit_types::state::{SelectionStrategy, RANGE_END};
use pagekit_types::styles::OFFSCREEN_STYLE;
use pagekit_types::{CopyError, CopyMethod, CopyOutcome, CopyRequest, DomError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement, Navigator, Window};

use crate::dom;
use crate::page;

/// Entry point behind `copyText`: copy, then show exactly one notification.
pub(crate) fn copy_and_notify(input: Option<String>) {
    let notifier = page::notifier();

    let request = match CopyRequest::from_input(input) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("{e}");
            notifier.show_outcome(CopyOutcome::Empty);
            return;
        }
    };

    spawn_local(async move {
        let result = copy(&request).await;
        match &result {
            Ok(method) => log::debug!("Copied {} chars via {method:?}", request.text().chars().count()),
            Err(e) => log::error!("Copy failed: {e}"),
        }
        notifier.show_outcome(CopyOutcome::from_result(&result));
    });
}

/// Try the async clipboard, then the textarea fallback.
pub(crate) async fn copy(request: &CopyRequest) -> Result<CopyMethod, CopyError> {
    match write_async(request.text()).await {
        Ok(()) => return Ok(CopyMethod::AsyncClipboard),
        Err(e) if e.allows_fallback() => {
            if matches!(e, CopyError::WriteRejected { .. }) {
                log::error!("Clipboard API failed: {e}");
            }
        }
        Err(e) => return Err(e),
    }

    fallback_copy(request.text())?;
    Ok(CopyMethod::Fallback)
}

async fn write_async(text: &str) -> Result<(), CopyError> {
    let window = dom::window()?;
    let navigator = window.navigator();
    if !window.is_secure_context() || !has_clipboard(&navigator) {
        return Err(CopyError::ClipboardUnavailable);
    }

    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map_err(|e| CopyError::WriteRejected { message: js_message(&e) })?;
    Ok(())
}

fn has_clipboard(navigator: &Navigator) -> bool {
    Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .is_ok_and(|value| !value.is_undefined() && !value.is_null())
}

/// Off-screen textarea + `execCommand("copy")`. The textarea is always removed.
fn fallback_copy(text: &str) -> Result<(), CopyError> {
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let textarea = mount_surface(&document, text)?;
    let result = select_and_copy(&window, &document, &textarea);
    textarea.remove();
    result
}

/// Append a read-only, off-screen textarea holding `text`.
fn mount_surface(document: &Document, text: &str) -> Result<HtmlTextAreaElement, DomError> {
    let body = document.body().ok_or(DomError::NoBody)?;

    let textarea: HtmlTextAreaElement = dom::create(document, "textarea")?;
    textarea.set_value(text);
    textarea.style().set_css_text(OFFSCREEN_STYLE);
    textarea
        .set_attribute("readonly", "")
        .map_err(|e| DomError::js("set readonly", &e))?;
    body.append_child(&textarea).map_err(|e| DomError::js("append textarea", &e))?;
    Ok(textarea)
}

fn select_and_copy(window: &Window, document: &Document, textarea: &HtmlTextAreaElement) -> Result<(), CopyError> {
    select_contents(window, document, textarea)?;

    let copied = document
        .unchecked_ref::<HtmlDocument>()
        .exec_command("copy")
        .map_err(|e| DomError::js("execCommand(copy)", &e))?;
    if copied {
        Ok(())
    } else {
        Err(CopyError::CommandRejected)
    }
}

/// Select the whole textarea. Returns the procedure that ended up selecting it.
fn select_contents(
    window: &Window,
    document: &Document,
    textarea: &HtmlTextAreaElement,
) -> Result<SelectionStrategy, CopyError> {
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    if SelectionStrategy::for_user_agent(&user_agent) == SelectionStrategy::Native {
        textarea.select();
        let end = textarea.selection_end().ok().flatten();
        if SelectionStrategy::native_selection_took(end, &textarea.value()) {
            return Ok(SelectionStrategy::Native);
        }
        log::debug!("select() did not take, using range selection");
    }

    select_range(window, document, textarea)?;
    Ok(SelectionStrategy::Range)
}

/// Range-based selection for platforms where `select()` is ignored.
fn select_range(window: &Window, document: &Document, textarea: &HtmlTextAreaElement) -> Result<(), CopyError> {
    let selection_failed = |e: JsValue| CopyError::SelectionFailed { message: js_message(&e) };

    textarea.set_content_editable("true");
    textarea.set_read_only(true);

    let range = document.create_range().map_err(selection_failed)?;
    range.select_node_contents(textarea).map_err(selection_failed)?;

    let selection = window
        .get_selection()
        .map_err(selection_failed)?
        .ok_or_else(|| CopyError::SelectionFailed { message: "no selection object".to_string() })?;
    selection.remove_all_ranges().map_err(selection_failed)?;
    selection.add_range(&range).map_err(selection_failed)?;

    textarea.set_selection_range(0, RANGE_END).map_err(selection_failed)?;
    Ok(())
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_crlf_text_selected_natively() {
        let window = dom::window().unwrap();
        let document = window.document().unwrap();
        let textarea = mount_surface(&document, "a\r\nb").unwrap();

        let used = select_contents(&window, &document, &textarea);
        textarea.remove();

        assert_eq!(used.unwrap(), SelectionStrategy::Native);
    }

    #[wasm_bindgen_test]
    fn test_surface_is_offscreen_and_readonly() {
        let document = dom::document().unwrap();
        let textarea = mount_surface(&document, "kode promo").unwrap();

        assert!(textarea.has_attribute("readonly"));
        assert_eq!(textarea.value(), "kode promo");
        assert_eq!(textarea.style().get_property_value("left").unwrap(), "-9999px");
        textarea.remove();
    }
}
