//! Scroll-position reactions: navbar emphasis, progress bar width, hero
//! parallax.
//!
//! Each reaction is a pure function of the current [`ScrollMetrics`]; they
//! are registered as independent handlers on a scroll [`Dispatcher`].

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::Element;
use crate::events::Dispatcher;
use crate::options::ScrollOptions;
use crate::util::css;

/// Inline style of the injected progress bar.
pub const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; \
    width: 0%; height: 3px; \
    background: linear-gradient(90deg, #3B82F6, #8B5CF6); \
    z-index: 1001; transition: width 0.1s ease;";

/// Scroll position and document extent at one scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the window.
    pub scroll_top: f64,
    /// Full scrollable height of the document.
    pub scroll_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Scrolled fraction of the document, in percent.
    ///
    /// When the document is no taller than the viewport the denominator is
    /// zero and the result is non-finite (`NaN` at the top, infinite
    /// otherwise). That value is passed through unchanged.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.scroll_top / (self.scroll_height - self.viewport_height) * 100.0
    }

    /// Whether the navbar should carry its emphasis class.
    #[must_use]
    pub fn is_past(&self, threshold: f64) -> bool {
        self.scroll_top > threshold
    }

    /// Parallax translate for a given rate.
    #[must_use]
    pub fn parallax_offset(&self, rate: f64) -> f64 {
        self.scroll_top * rate
    }
}

/// Registers the scroll reactions for the elements present on the page.
///
/// Also records the last scroll offset seen; nothing reads it to decide
/// anything.
pub struct ScrollReactor {
    dispatcher: Dispatcher<ScrollMetrics>,
    last_scroll_top: Rc<Cell<f64>>,
}

impl ScrollReactor {
    /// Wire handlers for whichever of `nav`, `progress_bar` and `hero`
    /// exist. Handlers run in that order.
    pub fn new<E: Element + 'static>(
        nav: Option<E>,
        progress_bar: Option<E>,
        hero: Option<E>,
        options: &ScrollOptions,
    ) -> Self {
        let mut dispatcher = Dispatcher::new();
        let last_scroll_top = Rc::new(Cell::new(0.0));

        if let Some(nav) = nav {
            let class = options.emphasis_class.clone();
            let threshold = options.emphasis_threshold;
            dispatcher.subscribe(move |m: &ScrollMetrics| {
                if m.is_past(threshold) {
                    nav.add_class(&class);
                } else {
                    nav.remove_class(&class);
                }
            });
        }

        let last = Rc::clone(&last_scroll_top);
        dispatcher.subscribe(move |m: &ScrollMetrics| last.set(m.scroll_top));

        if let Some(bar) = progress_bar {
            dispatcher.subscribe(move |m: &ScrollMetrics| {
                bar.set_style("width", &css::percent(m.progress_percent()));
            });
        }

        if let Some(hero) = hero {
            let rate = options.parallax_rate;
            dispatcher.subscribe(move |m: &ScrollMetrics| {
                hero.set_style(
                    "transform",
                    &css::translate_y_px(m.parallax_offset(rate)),
                );
            });
        }

        Self {
            dispatcher,
            last_scroll_top,
        }
    }

    /// React to one scroll event.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        self.dispatcher.emit(metrics);
    }

    /// Scroll offset of the most recent event.
    #[must_use]
    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top.get()
    }

    /// Number of registered reactions.
    #[cfg(test)]
    pub(crate) fn handler_count(&self) -> usize {
        self.dispatcher.len()
    }
}
