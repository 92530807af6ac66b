//! In-page anchor scrolling, the mobile menu, Escape handling and external
//! link feedback.

use std::rc::Rc;

use crate::dom::{Document, Element, Scheduler};
use crate::options::NavigationOptions;
use crate::util::css;

/// Window offset that puts an element just below the fixed header.
#[must_use]
pub fn section_offset(viewport_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    viewport_top + scroll_y - header_offset
}

/// Fragment id of an in-page link (`"#docs"` → `"docs"`).
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Smooth-scroll to the element with `id`, keeping it clear of the header.
/// Returns the scroll target, or `None` if no such element exists.
pub fn scroll_to_section<D: Document>(
    document: &D,
    id: &str,
    header_offset: f64,
) -> Option<f64> {
    let target = document.element_by_id(id)?;
    let top = section_offset(target.viewport_top(), document.scroll_y(), header_offset);
    document.smooth_scroll_to(top);
    Some(top)
}

/// Hamburger button and the link list it opens.
#[derive(Debug)]
pub struct MobileMenu<E> {
    button: E,
    links: Option<E>,
}

impl<E: Element> MobileMenu<E> {
    /// Menu for a button; the link list may be absent.
    pub fn new(button: E, links: Option<E>) -> Self {
        Self { button, links }
    }

    /// The hamburger button.
    #[must_use]
    pub fn button(&self) -> &E {
        &self.button
    }

    /// Toggle the open state of the links and the button.
    pub fn toggle(&self, active_class: &str) {
        if let Some(links) = &self.links {
            links.toggle_class(active_class);
        }
        self.button.toggle_class(active_class);
    }
}

/// Clear the active class from every element that carries it. Returns how
/// many elements were cleared.
pub fn deactivate_all<D: Document>(document: &D, active_class: &str) -> usize {
    let active = document.query_all(&format!(".{active_class}"));
    for element in &active {
        element.remove_class(active_class);
    }
    active.len()
}

/// Dim an external link while the new tab opens, then restore it.
pub fn dim_external_link<E: Element + 'static>(
    link: &E,
    options: &NavigationOptions,
    scheduler: &Rc<dyn Scheduler>,
) {
    link.set_style("opacity", &css::js_number(options.dim_opacity));
    let link = link.clone();
    scheduler.set_timeout(
        options.dim(),
        Box::new(move || link.set_style("opacity", "1")),
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::dom::memory::{ManualScheduler, MemoryDocument, MemoryElement};

    #[test]
    fn offset_keeps_header_clear() {
        assert_eq!(section_offset(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(section_offset(-300.0, 1200.0, 80.0), 820.0);
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#"), Some(""));
        assert_eq!(fragment_id("/docs"), None);
    }

    #[test]
    fn scroll_to_existing_section() {
        let doc = MemoryDocument::new(vec![
            MemoryElement::new("section").with_id("docs").at(350.0),
        ]);
        doc.set_scroll_y(100.0);
        assert_eq!(scroll_to_section(&doc, "docs", 80.0), Some(370.0));
        assert_eq!(doc.smooth_scrolls(), vec![370.0]);
    }

    #[test]
    fn scroll_to_missing_section_does_nothing() {
        let doc = MemoryDocument::new(Vec::new());
        assert_eq!(scroll_to_section(&doc, "nowhere", 80.0), None);
        assert!(doc.smooth_scrolls().is_empty());
    }

    #[test]
    fn menu_toggles_button_and_links() {
        let button = MemoryElement::new("button");
        let links = MemoryElement::new("ul");
        let menu = MobileMenu::new(button.clone(), Some(links.clone()));

        menu.toggle("active");
        assert!(button.has_class("active"));
        assert!(links.has_class("active"));
        menu.toggle("active");
        assert!(!button.has_class("active"));
        assert!(!links.has_class("active"));
    }

    #[test]
    fn menu_without_links_still_toggles_button() {
        let button = MemoryElement::new("button");
        let menu = MobileMenu::new(button.clone(), None);
        menu.toggle("active");
        assert!(menu.button().has_class("active"));
    }

    #[test]
    fn escape_clears_every_active_element() {
        let doc = MemoryDocument::new(vec![
            MemoryElement::new("ul").with_class("nav-links").with_class("active"),
            MemoryElement::new("button").with_class("tab-button").with_class("active"),
            MemoryElement::new("div").with_class("tab-content"),
        ]);
        assert_eq!(deactivate_all(&doc, "active"), 2);
        assert!(doc.query_all(".active").is_empty());
    }

    #[test]
    fn external_link_dims_then_restores() {
        let clock = ManualScheduler::new();
        let scheduler: Rc<dyn Scheduler> = clock.clone();
        let link = MemoryElement::new("a");
        dim_external_link(&link, &NavigationOptions::default(), &scheduler);

        assert_eq!(link.style("opacity"), "0.7");
        clock.advance(Duration::from_millis(500));
        assert_eq!(link.style("opacity"), "1");
    }
}
