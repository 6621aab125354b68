//! Fixtures for browser tests.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventInit, HtmlElement};

/// Append `html` inside a fresh `<div>` on the body. Remove the returned wrapper when done.
pub(crate) fn mount(document: &Document, html: &str) -> HtmlElement {
    let wrapper: HtmlElement = super::create(document, "div").unwrap();
    wrapper.set_inner_html(html);
    document.body().unwrap().append_child(&wrapper).unwrap();
    wrapper
}

/// Element by id, cast to `HtmlElement`.
pub(crate) fn by_id(document: &Document, id: &str) -> HtmlElement {
    document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

/// Bubbling, cancelable click. `dispatch_event` returns false once a handler prevented default.
pub(crate) fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

/// Inline `display` of an element.
pub(crate) fn display_of(element: &HtmlElement) -> String {
    element.style().get_property_value("display").unwrap()
}
