//! [`Element`] and [`Document`] over `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{Document, Element};
use crate::error::MotionError;
use crate::scroll::ScrollMetrics;

/// Convert a thrown JavaScript value into a [`MotionError::Dom`].
pub(crate) fn js_error(value: &JsValue) -> MotionError {
    MotionError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn ignore(result: Result<(), JsValue>, call: &str) {
    if let Err(e) = result {
        log::debug!("{call} failed: {}", js_error(&e));
    }
}

/// Handle to an HTML element of the live page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(HtmlElement);

impl WebElement {
    /// Wrap an element; non-HTML elements (e.g. SVG) are rejected.
    pub fn from_element(element: web_sys::Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self)
    }

    /// The underlying `HtmlElement`.
    #[must_use]
    pub fn html(&self) -> &HtmlElement {
        &self.0
    }
}

impl Element for WebElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        ignore(self.0.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, class: &str) {
        ignore(self.0.class_list().remove_1(class), "classList.remove");
    }

    fn toggle_class(&self, class: &str) {
        ignore(
            self.0.class_list().toggle(class).map(|_| ()),
            "classList.toggle",
        );
    }

    fn style(&self, property: &str) -> String {
        self.0.style().get_property_value(property).unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        ignore(self.0.style().set_property(property, value), "style.setProperty");
    }

    fn set_css_text(&self, css: &str) {
        self.0.style().set_css_text(css);
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(Self::from_element)
    }

    fn append_child(&self, child: &Self) -> Result<(), MotionError> {
        self.0
            .append_child(&child.0)
            .map(|_| ())
            .map_err(|e| js_error(&e))
    }

    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }
}

/// The live document and its window.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    window: Window,
    document: web_sys::Document,
}

impl BrowserDocument {
    /// Document of the current browsing context.
    pub fn current() -> Result<Self, MotionError> {
        let window =
            web_sys::window().ok_or(MotionError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(MotionError::MissingGlobal("document"))?;
        Ok(Self { window, document })
    }

    /// The window owning this document.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The raw `web_sys::Document`.
    #[must_use]
    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }

    /// Scroll offset and document extent right now.
    ///
    /// Reads `pageYOffset` for the offset and the root element's
    /// `scrollHeight`/`clientHeight` for the extent.
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        let (scroll_height, viewport_height) = self
            .document
            .document_element()
            .map_or((0.0, 0.0), |root| {
                (f64::from(root.scroll_height()), f64::from(root.client_height()))
            });
        ScrollMetrics {
            scroll_top: self.scroll_y(),
            scroll_height,
            viewport_height,
        }
    }
}

impl Document for BrowserDocument {
    type Element = WebElement;

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("querySelectorAll({selector}) failed: {}", js_error(&e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(WebElement::from_element)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .get_element_by_id(id)
            .and_then(WebElement::from_element)
    }

    fn create_element(&self, tag: &str) -> Result<WebElement, MotionError> {
        let element =
            self.document.create_element(tag).map_err(|e| js_error(&e))?;
        WebElement::from_element(element)
            .ok_or_else(|| MotionError::Dom(format!("<{tag}> is not an HTML element")))
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(WebElement)
    }

    fn head(&self) -> Option<WebElement> {
        self.document.head().map(|head| WebElement(head.into()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.page_y_offset().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
