//! Tab switching within one panel group.

use crate::dom::{Document, Element};
use crate::options::TabOptions;

/// Tab buttons and panels of one group.
///
/// A click deactivates every button and panel of the group, then activates
/// the clicked button and the panel whose id is `{target}{suffix}`. When no
/// element has that id the button still becomes active and no panel shows.
#[derive(Debug)]
pub struct TabSwitcher<E> {
    buttons: Vec<E>,
    panels: Vec<E>,
    options: TabOptions,
}

impl<E: Element> TabSwitcher<E> {
    /// Group from its buttons and panels.
    pub fn new(buttons: Vec<E>, panels: Vec<E>, options: TabOptions) -> Self {
        Self {
            buttons,
            panels,
            options,
        }
    }

    /// Buttons of the group, in document order.
    #[must_use]
    pub fn buttons(&self) -> &[E] {
        &self.buttons
    }

    /// Id of the panel a button targets.
    #[must_use]
    pub fn panel_id_for(&self, button: &E) -> Option<String> {
        button
            .attribute(&self.options.target_attribute)
            .map(|target| format!("{target}{}", self.options.panel_id_suffix))
    }

    /// Activate the button at `index`. Returns the panel that was shown,
    /// if any.
    pub fn activate<D>(&self, document: &D, index: usize) -> Option<E>
    where
        D: Document<Element = E>,
    {
        let button = self.buttons.get(index)?;
        let active = self.options.active_class.as_str();

        for other in self.buttons.iter().chain(&self.panels) {
            other.remove_class(active);
        }
        button.add_class(active);

        let panel = self
            .panel_id_for(button)
            .and_then(|id| document.element_by_id(&id));
        match &panel {
            Some(panel) => panel.add_class(active),
            None => log::debug!("tab button {index} has no matching panel"),
        }
        panel
    }

    /// Index of the button currently marked active.
    #[must_use]
    pub fn active_button(&self) -> Option<usize> {
        let active = self.options.active_class.as_str();
        self.buttons.iter().position(|b| b.has_class(active))
    }

    /// Panels currently marked active.
    #[must_use]
    pub fn active_panels(&self) -> Vec<&E> {
        let active = self.options.active_class.as_str();
        self.panels.iter().filter(|p| p.has_class(active)).collect()
    }
}
