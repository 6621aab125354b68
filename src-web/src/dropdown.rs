//! Dropdown menus.
//!
//! A trigger click toggles its panel and hides every other one. Any click that
//! bubbles up to the document hides all panels; clicks inside a panel stop
//! propagating so they never reach that handler.

use std::cell::RefCell;
use std::rc::Rc;

use pagekit_types::models::DropdownConfig;
use pagekit_types::state::{display_value, DropdownState};
use pagekit_types::DomError;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::dom::{self, Listener};

/// Wired dropdown triggers and panels. Dropping it unwires everything.
pub(crate) struct Dropdown {
    _listeners: Vec<Listener>,
}

struct Panels {
    state: DropdownState,
    elements: Vec<HtmlElement>,
}

impl Panels {
    fn apply(&self) {
        for (index, shown) in self.state.visibility() {
            if let Some(panel) = self.elements.get(index) {
                if let Err(e) = panel.style().set_property("display", display_value(shown)) {
                    log::warn!("Failed to update dropdown panel {index}: {e:?}");
                }
            }
        }
    }

    /// Index of `element` among the known panels.
    fn position(&self, element: &Element) -> Option<usize> {
        let node: &Node = element;
        self.elements.iter().position(|panel| panel.is_same_node(Some(node)))
    }
}

impl Dropdown {
    pub(crate) fn attach(document: &Document, config: &DropdownConfig) -> Result<Self, DomError> {
        let elements: Vec<HtmlElement> = dom::query_all(document, &config.panel_selector)?;
        let triggers: Vec<Element> = dom::query_all(document, &config.trigger_selector)?;
        let panels = Rc::new(RefCell::new(Panels { state: DropdownState::new(elements.len()), elements }));
        let mut listeners = Vec::with_capacity(triggers.len() + panels.borrow().elements.len() + 1);

        for trigger in &triggers {
            let Some(index) = resolve_panel(document, trigger, &panels.borrow(), config) else {
                // No panel to open; still never navigate, and let the click close open panels.
                log::debug!("Dropdown trigger without a panel");
                listeners.push(Listener::new(trigger, "click", |event: Event| event.prevent_default())?);
                continue;
            };
            let panels = Rc::clone(&panels);
            listeners.push(Listener::new(trigger, "click", move |event: Event| {
                event.stop_propagation();
                event.prevent_default();
                let mut panels = panels.borrow_mut();
                panels.state.toggle(index);
                panels.apply();
            })?);
        }

        let outside = Rc::clone(&panels);
        listeners.push(Listener::new(document, "click", move |_event: Event| {
            let mut panels = outside.borrow_mut();
            panels.state.close_all();
            panels.apply();
        })?);

        for panel in &panels.borrow().elements {
            listeners.push(Listener::new(panel, "click", |event: Event| event.stop_propagation())?);
        }

        log::debug!("Dropdown wired: {} triggers, {} panels", triggers.len(), panels.borrow().state.panel_count());
        Ok(Self { _listeners: listeners })
    }
}

/// Explicit `data-dropdown-target` id first, then the next sibling if it is a panel.
fn resolve_panel(document: &Document, trigger: &Element, panels: &Panels, config: &DropdownConfig) -> Option<usize> {
    if let Some(id) = trigger.get_attribute(&config.target_attribute) {
        return document.get_element_by_id(&id).and_then(|panel| panels.position(&panel));
    }

    let sibling = trigger.next_element_sibling()?;
    if sibling.matches(&config.panel_selector).unwrap_or(false) {
        panels.position(&sibling)
    } else {
        None
    }
}
