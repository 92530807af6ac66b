use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tabs", inline)]
#[serde(default)]
/// Tab buttons and the panels they select.
pub struct TabOptions {
    /// Tab buttons of the panel group.
    pub button_selector: String,
    /// Content panels of the panel group.
    pub panel_selector: String,
    /// Attribute on a button naming its target panel.
    pub target_attribute: String,
    /// Appended to the target name to form the panel id.
    pub panel_id_suffix: String,
    /// Class marking the active button and panel.
    pub active_class: String,
}

impl Default for TabOptions {
    fn default() -> Self {
        Self {
            button_selector: ".tab-button".to_owned(),
            panel_selector: ".tab-content".to_owned(),
            target_attribute: "data-tab".to_owned(),
            panel_id_suffix: "-tab".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}
