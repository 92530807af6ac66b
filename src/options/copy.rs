use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Copy", inline)]
#[serde(default)]
/// Copy-to-clipboard affordance on code samples.
pub struct CopyOptions {
    /// Code sample containers that receive a copy button.
    pub block_selector: String,
    /// Element inside a block whose text is copied.
    pub code_selector: String,
    /// Class of the injected button.
    pub button_class: String,
    /// How long the confirmation state stays up, in milliseconds.
    pub confirm_ms: u64,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            block_selector: ".code-block".to_owned(),
            code_selector: "code".to_owned(),
            button_class: "copy-button".to_owned(),
            confirm_ms: 2000,
        }
    }
}

impl CopyOptions {
    /// Confirmation duration as a [`Duration`].
    #[must_use]
    pub fn confirm(&self) -> Duration {
        Duration::from_millis(self.confirm_ms)
    }
}
