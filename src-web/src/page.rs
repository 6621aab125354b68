//! Page startup and controller ownership.
//!
//! One [`Page`] per document, created on first use. It owns the notifier
//! from the start and the DOM controllers once the document has parsed.

use std::cell::RefCell;

use pagekit_types::{DomError, PageConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, PageTransitionEvent};

use crate::carousel::Carousel;
use crate::dropdown::Dropdown;
use crate::notify::Notifier;
use crate::scroll::SmoothScroll;
use crate::dom::Listener;
use crate::{config, dom, styles};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

struct Page {
    config: PageConfig,
    /// Config was read before the document finished parsing
    config_early: bool,
    notifier: Notifier,
    controllers: Option<Controllers>,
    lifecycle: Option<Listener>,
}

/// Dropping unwires listeners; the carousel is stopped explicitly on teardown.
struct Controllers {
    _dropdown: Option<Dropdown>,
    _scroll: Option<SmoothScroll>,
    carousel: Option<Carousel>,
}

impl Page {
    fn new() -> Self {
        let (config, config_early) = read_config();
        let notifier = Notifier::new(config.notification.clone());
        Self { config, config_early, notifier, controllers: None, lifecycle: None }
    }

    /// Wire every controller once. Each failure is logged and skipped.
    fn wire(&mut self, document: &Document) {
        if self.controllers.is_some() {
            return;
        }

        if self.config_early {
            let (config, still_early) = read_config();
            self.notifier.reconfigure(config.notification.clone());
            self.config = config;
            self.config_early = still_early;
        }

        let dropdown = report("dropdown", Dropdown::attach(document, &self.config.dropdown));
        let scroll = report("smooth scroll", SmoothScroll::attach(document, &self.config.scroll));
        if let Some(inserted) = report("style injection", styles::inject(document, &self.config.styles)) {
            log::debug!("Animation styles {}", if inserted { "injected" } else { "already present" });
        }
        let carousel = report("carousel", Carousel::start(document, &self.config.carousel)).flatten();

        self.controllers = Some(Controllers { _dropdown: dropdown, _scroll: scroll, carousel });
        if self.lifecycle.is_none() {
            self.lifecycle = report("teardown hook", teardown_on_pagehide());
        }
        log::info!("Page enhancements ready");
    }

    /// Stop the carousel and unwire every listener.
    fn teardown(&mut self) {
        let Some(controllers) = self.controllers.take() else { return };
        if let Some(carousel) = controllers.carousel {
            carousel.stop();
        }
        log::debug!("Page enhancements torn down");
    }
}

/// Config plus whether it was read while the document was still loading.
fn read_config() -> (PageConfig, bool) {
    match dom::window() {
        Ok(window) => {
            let early = window
                .document()
                .map_or(true, |document| document.ready_state() == "loading");
            (config::load(&window), early)
        }
        Err(e) => {
            log::warn!("{e}, using default config");
            (PageConfig::default(), false)
        }
    }
}

/// Tear down when the page is unloaded for good (not kept in the back/forward cache).
fn teardown_on_pagehide() -> Result<Listener, DomError> {
    let window = dom::window()?;
    Listener::new(&window, "pagehide", |event: Event| {
        let persisted = event.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
        if !persisted {
            PAGE.with(|slot| {
                if let Some(page) = slot.borrow_mut().as_mut() {
                    page.teardown();
                }
            });
        }
    })
}

fn report<T>(what: &str, result: Result<T, DomError>) -> Option<T> {
    result.map_err(|e| log::warn!("Skipping {what}: {e}")).ok()
}

/// The page notifier, creating the page state on first use.
pub(crate) fn notifier() -> Notifier {
    PAGE.with(|slot| slot.borrow_mut().get_or_insert_with(Page::new).notifier.clone())
}

/// Wire controllers now, or on `DOMContentLoaded` while the document is still loading.
pub(crate) fn boot_when_ready() -> Result<(), DomError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        wire(&document);
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let on_ready = Closure::once_into_js(move || match dom::document() {
        Ok(document) => wire(&document),
        Err(e) => log::error!("Page enhancements not started: {e}"),
    });
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            on_ready.unchecked_ref(),
            &options,
        )
        .map_err(|e| DomError::js("addEventListener(DOMContentLoaded)", &e))
}

fn wire(document: &Document) {
    PAGE.with(|slot| slot.borrow_mut().get_or_insert_with(Page::new).wire(document));
}

#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::testing::mount;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_early_config_is_reread_when_wiring() {
        let document = dom::document().unwrap();
        let mut page = Page {
            config: PageConfig::default(),
            config_early: true,
            notifier: Notifier::new(PageConfig::default().notification),
            controllers: None,
            lifecycle: None,
        };
        let root = mount(
            &document,
            r#"<script type="application/json" id="pagekit-config">
                 {"notification": {"class_name": "late-config-toast"}}
               </script>"#,
        );

        page.wire(&document);
        root.remove();

        assert_eq!(page.config.notification.class_name, "late-config-toast");
        assert!(!page.config_early);

        page.notifier.show("tersalin");
        let toasts = dom::query_all::<web_sys::Element>(&document, ".late-config-toast").unwrap();
        assert_eq!(toasts.len(), 1);
        toasts.iter().for_each(web_sys::Element::remove);
        page.teardown();
    }

    #[wasm_bindgen_test]
    fn test_config_read_after_parsing_is_kept() {
        let (_, early) = read_config();
        assert!(!early);
    }

    #[wasm_bindgen_test]
    fn test_teardown_is_idempotent() {
        let document = dom::document().unwrap();
        let mut page = Page::new();
        page.wire(&document);
        assert!(page.controllers.is_some());

        page.teardown();
        page.teardown();
        assert!(page.controllers.is_none());
    }
}
