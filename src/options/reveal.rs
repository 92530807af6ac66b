use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport-triggered reveal of cards, steps and category groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
pub struct RevealOptions {
    /// Elements that start hidden and fade in when scrolled into view.
    pub selector: String,
    /// Intersection ratio that counts as "in view".
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: f64,
    /// Root margin handed to the intersection watcher.
    pub root_margin: String,
    /// Vertical offset (px) of the hidden state.
    pub hidden_offset: f64,
    /// Opacity/transform transition length in milliseconds.
    pub transition_ms: u64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".feature-card, .doc-card, .step, .category-group"
                .to_owned(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
            hidden_offset: 20.0,
            transition_ms: 600,
        }
    }
}

impl RevealOptions {
    /// Transition length as a [`Duration`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Staggered entrance of the hero block on page load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hero", inline)]
#[serde(default)]
pub struct HeroOptions {
    /// Hero children, revealed in document order.
    pub selector: String,
    /// Vertical offset (px) of the hidden state.
    pub hidden_offset: f64,
    /// Opacity/transform transition length in milliseconds.
    pub transition_ms: u64,
    /// Delay before the first element is revealed.
    pub base_delay_ms: u64,
    /// Extra delay added per element index.
    pub stagger_ms: u64,
}

impl Default for HeroOptions {
    fn default() -> Self {
        Self {
            selector: ".hero-badge, .hero-title, .hero-description, \
                       .hero-actions, .hero-stats"
                .to_owned(),
            hidden_offset: 30.0,
            transition_ms: 800,
            base_delay_ms: 100,
            stagger_ms: 200,
        }
    }
}

impl HeroOptions {
    /// Transition length as a [`Duration`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Per-index stagger as a [`Duration`].
    #[must_use]
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    /// Delay before the first element is revealed.
    #[must_use]
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}
