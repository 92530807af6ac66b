//! Staggered entrance of hero elements on page load.
//!
//! Element `i` is revealed after `base_delay + i * stagger`, and its CSS
//! transition is delayed by `i * stagger` so the visual wave and the timers
//! agree. Viewport position plays no part.

use std::time::Duration;

use super::reveal::RevealStyle;
use crate::dom::{Element, Scheduler};
use crate::options::HeroOptions;

/// Timing of the hero entrance wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStagger {
    /// Delay before the first element is revealed.
    pub base_delay: Duration,
    /// Delay added per element index.
    pub stagger: Duration,
}

impl HeroStagger {
    /// Timing from options.
    #[must_use]
    pub fn from_options(options: &HeroOptions) -> Self {
        Self {
            base_delay: options.base_delay(),
            stagger: options.stagger(),
        }
    }

    /// Timer delay for the element at `index`.
    #[must_use]
    pub fn reveal_delay(&self, index: usize) -> Duration {
        self.base_delay + self.transition_delay(index)
    }

    /// CSS transition delay for the element at `index`.
    #[must_use]
    pub fn transition_delay(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// Hide every element now and schedule its reveal. Returns the number
    /// of timers scheduled.
    pub fn start<E: Element + 'static>(
        &self,
        elements: Vec<E>,
        options: &HeroOptions,
        scheduler: &dyn Scheduler,
    ) -> usize {
        let count = elements.len();
        for (index, element) in elements.into_iter().enumerate() {
            let style = RevealStyle {
                hidden_offset: options.hidden_offset,
                transition: options.transition(),
                delay: Some(self.transition_delay(index)),
            };
            style.hide(&element);
            scheduler.set_timeout(
                self.reveal_delay(index),
                Box::new(move || RevealStyle::show(&element)),
            );
        }
        count
    }
}
