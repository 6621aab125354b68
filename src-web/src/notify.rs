//! Toast notifications.
//!
//! One toast on screen at a time. `show` removes whatever is visible and
//! cancels its timers before mounting the new node.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use pagekit_types::models::NotificationConfig;
use pagekit_types::state::{sanitize_message, ToastSlot, ToastTicket};
use pagekit_types::styles::{exit_animation, toast_style};
use pagekit_types::{CopyOutcome, DomError};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

/// Handle to the page's toast presenter. Clones share the same slot.
#[derive(Clone)]
pub(crate) struct Notifier {
    inner: Rc<RefCell<NotifierState>>,
}

struct NotifierState {
    config: NotificationConfig,
    slot: ToastSlot,
    node: Option<HtmlElement>,
    dismiss: Option<Timeout>,
    removal: Option<Timeout>,
}

impl Notifier {
    pub(crate) fn new(config: NotificationConfig) -> Self {
        let state = NotifierState { config, slot: ToastSlot::new(), node: None, dismiss: None, removal: None };
        Self { inner: Rc::new(RefCell::new(state)) }
    }

    /// Swap in a config read later than the notifier was created.
    pub(crate) fn reconfigure(&self, config: NotificationConfig) {
        self.inner.borrow_mut().config = config;
    }

    /// Show the fixed message for a copy outcome.
    pub(crate) fn show_outcome(&self, outcome: CopyOutcome) {
        let message = outcome.message(&self.inner.borrow().config.messages).to_owned();
        self.show(&message);
    }

    /// Show `message`, pre-empting any visible toast.
    pub(crate) fn show(&self, message: &str) {
        if let Err(e) = self.try_show(message) {
            log::error!("Failed to show notification: {e}");
        }
    }

    fn try_show(&self, message: &str) -> Result<(), DomError> {
        let document = dom::document()?;
        let body = document.body().ok_or(DomError::NoBody)?;
        let text = sanitize_message(message);

        let mut state = self.inner.borrow_mut();
        state.clear(&document);

        let node: HtmlElement = dom::create(&document, "div")?;
        node.set_class_name(&state.config.class_name);
        node.set_text_content(Some(&text));
        node.style().set_css_text(&toast_style(state.config.exit_ms));
        body.append_child(&node).map_err(|e| DomError::js("append notification", &e))?;

        let (ticket, preempted) = state.slot.show();
        if preempted {
            log::debug!("Notification replaced before dismissal");
        }
        state.node = Some(node);

        let weak = Rc::downgrade(&self.inner);
        let visible_ms = state.config.visible_ms;
        state.dismiss = Some(Timeout::new(visible_ms, move || begin_exit(&weak, ticket)));
        Ok(())
    }
}

impl NotifierState {
    /// Drop timers (cancelling them) and remove every toast node on the page.
    fn clear(&mut self, document: &Document) {
        self.dismiss = None;
        self.removal = None;
        if let Some(node) = self.node.take() {
            node.remove();
        }

        let selector = format!(".{}", self.config.class_name);
        match dom::query_all::<Element>(document, &selector) {
            Ok(strays) => strays.iter().for_each(Element::remove),
            Err(e) => log::debug!("Skipping stray notification sweep: {e}"),
        }
    }
}

fn begin_exit(weak: &Weak<RefCell<NotifierState>>, ticket: ToastTicket) {
    let Some(inner) = weak.upgrade() else { return };
    let mut state = inner.borrow_mut();
    if !state.slot.begin_exit(ticket) {
        return;
    }

    let exit_ms = state.config.exit_ms;
    if let Some(node) = &state.node {
        if let Err(e) = node.style().set_property("animation", &exit_animation(exit_ms)) {
            log::debug!("Exit animation not applied: {e:?}");
        }
    }

    let weak = Rc::downgrade(&inner);
    state.removal = Some(Timeout::new(exit_ms, move || finish(&weak, ticket)));
}

fn finish(weak: &Weak<RefCell<NotifierState>>, ticket: ToastTicket) {
    let Some(inner) = weak.upgrade() else { return };
    let mut state = inner.borrow_mut();
    if state.slot.finish(ticket) {
        if let Some(node) = state.node.take() {
            node.remove();
        }
    }
}
