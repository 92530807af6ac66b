//! Platform-agnostic seams between the page controllers and the browser.
//!
//! Controllers only talk to the page through these traits. The `web`
//! feature implements them on top of `web-sys`; tests use the in-memory
//! implementation in `memory`.

#[cfg(test)]
pub(crate) mod memory;

use std::time::Duration;

use crate::error::MotionError;

/// A handle to one element of the page.
///
/// Handles are cheap to clone and compare equal when they refer to the same
/// node. Mutations never fail from the caller's point of view: a rejected
/// DOM call is logged by the implementation and ignored.
pub trait Element: Clone + PartialEq {
    /// The element's `id` attribute (empty when unset).
    fn id(&self) -> String;
    /// Value of an attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;
    /// Text content of the element and its descendants.
    fn text_content(&self) -> String;
    /// Replace the element's children with a single text node.
    fn set_text_content(&self, text: &str);
    /// Serialized markup of the element's children.
    fn inner_html(&self) -> String;
    /// Replace the element's children with parsed markup.
    fn set_inner_html(&self, html: &str);
    /// Whether the element carries a class.
    fn has_class(&self, class: &str) -> bool;
    /// Add a class (no-op if already present).
    fn add_class(&self, class: &str);
    /// Remove a class (no-op if absent).
    fn remove_class(&self, class: &str);
    /// Toggle a class.
    fn toggle_class(&self, class: &str);
    /// Current inline value of a CSS property (empty when unset).
    fn style(&self, property: &str) -> String;
    /// Set an inline CSS property.
    fn set_style(&self, property: &str, value: &str);
    /// Replace the whole inline style declaration.
    fn set_css_text(&self, css: &str);
    /// First descendant matching a selector.
    fn query_selector(&self, selector: &str) -> Option<Self>;
    /// Append a child element.
    fn append_child(&self, child: &Self) -> Result<(), MotionError>;
    /// Distance (px) from the viewport top to the element's border box.
    fn viewport_top(&self) -> f64;
}

/// Document-level queries and window-level scrolling.
pub trait Document {
    /// Element handle type of this document.
    type Element: Element;

    /// Every element matching a selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First element matching a selector.
    fn query(&self, selector: &str) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    /// Element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<Self::Element, MotionError>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Element>;

    /// The `<head>` element.
    fn head(&self) -> Option<Self::Element>;

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Smoothly scroll the window so `top` is at the viewport top.
    fn smooth_scroll_to(&self, top: f64);
}

/// One-shot unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Animation-frame callback; receives the frame timestamp in milliseconds.
pub type FrameTask = Box<dyn FnOnce(f64)>;

/// Timers and animation frames.
///
/// Nothing scheduled here can be cancelled: every task runs once it is due.
pub trait Scheduler {
    /// Current time in milliseconds on the same clock as frame timestamps.
    fn now(&self) -> f64;
    /// Run `task` once after `delay`.
    fn set_timeout(&self, delay: Duration, task: Task);
    /// Run `task` before the next repaint.
    fn request_frame(&self, task: FrameTask);
}

/// Completion callback of a clipboard write.
pub type ClipboardCallback = Box<dyn FnOnce(Result<(), MotionError>)>;

/// Asynchronous clipboard access.
pub trait Clipboard {
    /// Request a write of `text`; `done` runs when the request settles.
    fn write_text(&self, text: &str, done: ClipboardCallback);
}
