//! Viewport-triggered reveal of cards and sections.

use std::time::Duration;

use crate::dom::Element;
use crate::options::RevealOptions;
use crate::util::css;

/// Inline styles of the hidden state and the transition into the visible
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Vertical offset (px) while hidden.
    pub hidden_offset: f64,
    /// Length of the opacity/transform transition.
    pub transition: Duration,
    /// Transition delay; `None` omits the delay from the shorthand.
    pub delay: Option<Duration>,
}

impl RevealStyle {
    /// `transition` shorthand covering opacity and transform.
    #[must_use]
    pub fn transition_css(&self) -> String {
        let length = css::seconds(self.transition);
        match self.delay {
            Some(delay) => {
                let delay = css::seconds(delay);
                format!(
                    "opacity {length} ease {delay}, transform {length} ease {delay}"
                )
            }
            None => format!("opacity {length} ease, transform {length} ease"),
        }
    }

    /// Put an element into the hidden state with the transition attached.
    pub fn hide<E: Element>(&self, element: &E) {
        element.set_style("opacity", "0");
        element.set_style("transform", &css::translate_y(self.hidden_offset));
        element.set_style("transition", &self.transition_css());
    }

    /// Move an element to the visible state.
    pub fn show<E: Element>(element: &E) {
        element.set_style("opacity", "1");
        element.set_style("transform", &css::translate_y(0.0));
    }
}

/// Hides every target at construction and reveals each one the first time
/// the intersection watcher reports it in view.
///
/// Targets stay observed after revealing; later reports are no-ops.
#[derive(Debug)]
pub struct RevealController<E> {
    targets: Vec<E>,
    revealed: Vec<bool>,
}

impl<E: Element> RevealController<E> {
    /// Hide `targets` and start tracking them.
    pub fn new(targets: Vec<E>, options: &RevealOptions) -> Self {
        let style = RevealStyle {
            hidden_offset: options.hidden_offset,
            transition: options.transition(),
            delay: None,
        };
        for target in &targets {
            style.hide(target);
        }
        let revealed = vec![false; targets.len()];
        Self { targets, revealed }
    }

    /// Elements the intersection watcher should observe.
    #[must_use]
    pub fn targets(&self) -> &[E] {
        &self.targets
    }

    /// Handle one intersection report. Returns `true` if this report
    /// revealed the element.
    pub fn on_intersection(&mut self, target: &E, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(idx) = self.targets.iter().position(|t| t == target) else {
            return false;
        };
        if self.revealed[idx] {
            return false;
        }
        self.revealed[idx] = true;
        RevealStyle::show(target);
        true
    }

    /// Whether the target at `idx` has been revealed.
    #[cfg(test)]
    pub(crate) fn is_revealed(&self, idx: usize) -> bool {
        self.revealed.get(idx).copied().unwrap_or(false)
    }

    /// Number of targets revealed so far.
    #[cfg(test)]
    pub(crate) fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
