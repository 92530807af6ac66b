use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// In-page anchors, mobile menu, Escape handling and external links.
pub struct NavigationOptions {
    /// Links that smooth-scroll to an in-page target.
    pub anchor_selector: String,
    /// Height (px) of the fixed header kept clear when scrolling to a
    /// section.
    pub header_offset: f64,
    /// Hamburger button of the mobile layout.
    pub menu_button_selector: String,
    /// Link list opened by the hamburger button.
    pub nav_links_selector: String,
    /// Class toggled by the menu and cleared by Escape.
    pub active_class: String,
    /// Key that clears every active element.
    pub close_key: String,
    /// Links that open a new tab.
    pub external_selector: String,
    /// Opacity applied while an external link is being opened.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub dim_opacity: f64,
    /// How long the dimmed state lasts, in milliseconds.
    pub dim_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            header_offset: 80.0,
            menu_button_selector: ".mobile-menu-button".to_owned(),
            nav_links_selector: ".nav-links".to_owned(),
            active_class: "active".to_owned(),
            close_key: "Escape".to_owned(),
            external_selector: "a[target=\"_blank\"]".to_owned(),
            dim_opacity: 0.7,
            dim_ms: 500,
        }
    }
}

impl NavigationOptions {
    /// Dim duration as a [`Duration`].
    #[must_use]
    pub fn dim(&self) -> Duration {
        Duration::from_millis(self.dim_ms)
    }
}
