//! Review carousel.

use gloo_timers::callback::Interval;
use pagekit_types::models::CarouselConfig;
use pagekit_types::state::SlideCursor;
use pagekit_types::DomError;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

/// Running carousel. The ticker is cancelled by [`Carousel::stop`] or on drop.
pub(crate) struct Carousel {
    ticker: Interval,
}

impl Carousel {
    /// Start advancing the track, or `None` if the page has no track.
    pub(crate) fn start(document: &Document, config: &CarouselConfig) -> Result<Option<Self>, DomError> {
        let Some(track) = dom::query_one::<HtmlElement>(document, &config.track_selector)? else {
            return Ok(None);
        };
        let slide_count = dom::query_all::<Element>(document, &config.slide_selector)?.len();
        let mut cursor = SlideCursor::new(slide_count);

        let ticker = Interval::new(config.interval_ms, move || {
            cursor.advance();
            let transform = cursor.transform();
            if let Err(e) = track.style().set_property("transform", &transform) {
                log::warn!("Failed to move carousel track: {e:?}");
            }
        });

        log::debug!("Carousel started with {slide_count} slides every {}ms", config.interval_ms);
        Ok(Some(Self { ticker }))
    }

    /// Cancel the ticker. The track keeps its current transform.
    pub(crate) fn stop(self) {
        drop(self.ticker.cancel());
        log::debug!("Carousel stopped");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::testing::{by_id, mount};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn fixture_config() -> CarouselConfig {
        CarouselConfig {
            track_selector: "#carousel-fixture".to_string(),
            slide_selector: "#carousel-fixture .slide-fixture".to_string(),
            interval_ms: 20,
        }
    }

    fn transform_of(track: &HtmlElement) -> String {
        track.style().get_property_value("transform").unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_ticks_move_track_and_stop_freezes_it() {
        let document = crate::dom::document().unwrap();
        let root = mount(
            &document,
            r#"<div id="carousel-fixture">
                 <div class="slide-fixture"></div>
                 <div class="slide-fixture"></div>
                 <div class="slide-fixture"></div>
               </div>"#,
        );
        let track = by_id(&document, "carousel-fixture");

        let carousel = Carousel::start(&document, &fixture_config()).unwrap().unwrap();
        assert_eq!(transform_of(&track), "");

        TimeoutFuture::new(90).await;
        let moved = transform_of(&track);
        assert!(moved.starts_with("translateX("), "track never moved: {moved:?}");

        carousel.stop();
        let frozen = transform_of(&track);
        TimeoutFuture::new(90).await;
        assert_eq!(transform_of(&track), frozen);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_track_does_not_start() {
        let document = crate::dom::document().unwrap();
        assert!(Carousel::start(&document, &fixture_config()).unwrap().is_none());
    }
}
