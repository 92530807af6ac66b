use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Scroll-position reactions: navbar emphasis, progress bar, parallax.
pub struct ScrollOptions {
    /// Navbar element.
    pub nav_selector: String,
    /// Class added to the navbar past the emphasis threshold.
    pub emphasis_class: String,
    /// Scroll offset (px) above which the navbar is emphasized.
    pub emphasis_threshold: f64,
    /// Class of the injected progress bar.
    pub progress_class: String,
    /// Hero element that receives the parallax offset.
    pub parallax_selector: String,
    /// Parallax translate per scrolled pixel.
    pub parallax_rate: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            nav_selector: ".nav".to_owned(),
            emphasis_class: "scrolled".to_owned(),
            emphasis_threshold: 100.0,
            progress_class: "scroll-progress".to_owned(),
            parallax_selector: ".hero".to_owned(),
            parallax_rate: -0.5,
        }
    }
}
