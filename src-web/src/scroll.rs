//! Smooth scrolling for in-page anchors.

use pagekit_types::models::ScrollConfig;
use pagekit_types::state::AnchorTarget;
use pagekit_types::DomError;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Listener};

/// Click handlers on every matching anchor.
pub(crate) struct SmoothScroll {
    _listeners: Vec<Listener>,
}

impl SmoothScroll {
    pub(crate) fn attach(document: &Document, config: &ScrollConfig) -> Result<Self, DomError> {
        let anchors: Vec<Element> = dom::query_all(document, &config.anchor_selector)?;
        let mut listeners = Vec::with_capacity(anchors.len());

        for anchor in anchors {
            let push_history = config.push_history;
            let target = anchor.clone();
            listeners.push(Listener::new(&target, "click", move |event: Event| {
                on_anchor_click(&anchor, &event, push_history);
            })?);
        }

        log::debug!("Smooth scroll wired on {} anchors", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}

fn on_anchor_click(anchor: &Element, event: &Event, push_history: bool) {
    let href = anchor.get_attribute("href");
    match AnchorTarget::classify(href.as_deref()) {
        AnchorTarget::Placeholder => event.prevent_default(),
        AnchorTarget::External => {}
        AnchorTarget::Fragment { href, id } => {
            let Some(target) = anchor.owner_document().and_then(|d| d.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);

            if push_history {
                if let Err(e) = push_fragment(href) {
                    log::warn!("Failed to update URL: {e}");
                }
            }
        }
    }
}

/// Put `href` in the address bar without navigating.
fn push_fragment(href: &str) -> Result<(), DomError> {
    let history = dom::window()?.history().map_err(|e| DomError::js("window.history", &e))?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(href))
        .map_err(|e| DomError::js("history.pushState", &e))
}

#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::testing::{by_id, cancelable_click, mount};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;

    const FIXTURE: &str = r##"
        <a class="scroll-fixture" id="to-top" href="#">Top</a>
        <a class="scroll-fixture" id="to-section" href="#section-id">Reviews</a>
        <a class="scroll-fixture" id="to-nowhere" href="#no-such-section">Gone</a>
        <section id="section-id">reviews</section>
    "##;

    fn fixture_config() -> ScrollConfig {
        ScrollConfig { anchor_selector: "a.scroll-fixture".to_string(), push_history: true }
    }

    #[wasm_bindgen_test]
    fn test_fragment_click_pushes_exactly_one_entry() {
        let document = dom::document().unwrap();
        let window = dom::window().unwrap();
        let history = window.history().unwrap();
        let root = mount(&document, FIXTURE);
        let _scroll = SmoothScroll::attach(&document, &fixture_config()).unwrap();

        let before = history.length().unwrap();
        let not_cancelled = by_id(&document, "to-section").dispatch_event(&cancelable_click()).unwrap();

        assert!(!not_cancelled);
        assert_eq!(history.length().unwrap(), before + 1);
        assert_eq!(window.location().hash().unwrap(), "#section-id");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_bare_hash_changes_nothing() {
        let document = dom::document().unwrap();
        let window = dom::window().unwrap();
        let history = window.history().unwrap();
        let root = mount(&document, FIXTURE);
        let _scroll = SmoothScroll::attach(&document, &fixture_config()).unwrap();

        let (length, hash) = (history.length().unwrap(), window.location().hash().unwrap());
        let not_cancelled = by_id(&document, "to-top").dispatch_event(&cancelable_click()).unwrap();

        assert!(!not_cancelled);
        assert_eq!(history.length().unwrap(), length);
        assert_eq!(window.location().hash().unwrap(), hash);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_unresolved_fragment_is_left_alone() {
        let document = dom::document().unwrap();
        let root = mount(&document, FIXTURE);
        let _scroll = SmoothScroll::attach(&document, &fixture_config()).unwrap();

        // The document listener runs after the anchor handler; record its verdict, then stop navigation.
        let verdict = Rc::new(Cell::new(None));
        let seen = Rc::clone(&verdict);
        let _guard = Listener::new(&document, "click", move |event: Event| {
            seen.set(Some(event.default_prevented()));
            event.prevent_default();
        })
        .unwrap();
        by_id(&document, "to-nowhere").dispatch_event(&cancelable_click()).unwrap();

        assert_eq!(verdict.get(), Some(false));
        root.remove();
    }
}
