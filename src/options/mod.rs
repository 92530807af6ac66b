//! Page behaviour options with TOML override support.
//!
//! Every tunable of the page (selectors, thresholds, durations, offsets) is
//! consolidated here. Options serialize to/from TOML so a page can embed a
//! partial override block, and the CLI can validate one ahead of time.

mod copy;
mod counter;
mod navigation;
mod reveal;
mod scroll;
mod tabs;

use std::path::Path;

pub use copy::CopyOptions;
pub use counter::CounterOptions;
pub use navigation::NavigationOptions;
pub use reveal::{HeroOptions, RevealOptions};
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};
pub use tabs::TabOptions;

use crate::error::MotionError;

/// Id of the `<script type="application/toml">` block the web entry point
/// reads overrides from.
pub const OPTIONS_ELEMENT_ID: &str = "landing-motion-options";

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML (e.g. only overriding `[counter]`) works correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Viewport-triggered reveal of cards and sections.
    pub reveal: RevealOptions,
    /// Timer-driven staggered entrance of hero elements.
    pub hero: HeroOptions,
    /// Stats counter animation.
    pub counter: CounterOptions,
    /// Navbar emphasis, progress bar and parallax.
    pub scroll: ScrollOptions,
    /// Tabbed content panels.
    pub tabs: TabOptions,
    /// Copy-to-clipboard buttons on code blocks.
    pub copy: CopyOptions,
    /// Anchor scrolling, mobile menu and external links.
    pub navigation: NavigationOptions,
}

impl Options {
    /// Generate JSON Schema describing every option section.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, MotionError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MotionError> {
        let content = std::fs::read_to_string(path).map_err(MotionError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MotionError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MotionError::Io)?;
        }
        std::fs::write(path, content).map_err(MotionError::Io)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, MotionError> {
        toml::to_string_pretty(self)
            .map_err(|e| MotionError::OptionsParse(e.to_string()))
    }
}
