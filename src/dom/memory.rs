//! In-memory DOM, manual clock and scripted clipboard for tests.
//!
//! Supports the selector subset the page uses: comma-separated compound
//! selectors made of an optional tag, `.class`, `#id`, `[attr]`,
//! `[attr="v"]` and `[attr^="v"]`. No combinators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use rustc_hash::FxHashMap;

use super::{
    Clipboard, ClipboardCallback, Document, Element, FrameTask, Scheduler,
    Task,
};
use crate::error::MotionError;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: FxHashMap<String, String>,
    style: FxHashMap<String, String>,
    text: String,
    html: Option<String>,
    children: Vec<MemoryElement>,
    viewport_top: f64,
}

/// Shared handle to an in-memory node. Equality is node identity.
#[derive(Debug, Clone)]
pub(crate) struct MemoryElement(Rc<RefCell<Node>>);

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MemoryElement {
    pub(crate) fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_owned(),
            ..Node::default()
        })))
    }

    pub(crate) fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub(crate) fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub(crate) fn with_attr(self, name: &str, value: &str) -> Self {
        let _ = self
            .0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn with_text(self, text: &str) -> Self {
        self.set_text_content(text);
        self
    }

    pub(crate) fn with_child(self, child: Self) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    pub(crate) fn at(self, viewport_top: f64) -> Self {
        self.0.borrow_mut().viewport_top = viewport_top;
        self
    }

    pub(crate) fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    fn matches(&self, selector: &Compound) -> bool {
        let node = self.0.borrow();
        if selector.tag.as_deref().is_some_and(|tag| tag != node.tag) {
            return false;
        }
        if !selector.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        selector.attributes.iter().all(|(name, test)| {
            let Some(value) = node.attributes.get(name) else {
                return false;
            };
            match test {
                AttrTest::Exists => true,
                AttrTest::Equals(expected) => value == expected,
                AttrTest::Prefix(prefix) => value.starts_with(prefix.as_str()),
            }
        })
    }

    /// Pre-order walk over this element and its descendants.
    fn walk(&self, out: &mut Vec<Self>) {
        out.push(self.clone());
        for child in &self.0.borrow().children {
            child.walk(out);
        }
    }

    fn descendants(&self) -> Vec<Self> {
        let mut all = Vec::new();
        self.walk(&mut all);
        let _ = all.remove(0);
        all
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn text_content(&self) -> String {
        let node = self.0.borrow();
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&child.text_content());
        }
        text
    }

    fn set_text_content(&self, text: &str) {
        let mut node = self.0.borrow_mut();
        node.text = text.to_owned();
        node.html = None;
        node.children.clear();
    }

    fn inner_html(&self) -> String {
        let node = self.0.borrow();
        node.html.clone().unwrap_or_else(|| node.text.clone())
    }

    fn set_inner_html(&self, html: &str) {
        let mut node = self.0.borrow_mut();
        node.text = strip_tags(html);
        node.html = Some(html.to_owned());
        node.children.clear();
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    fn style(&self, property: &str) -> String {
        self.0.borrow().style.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self
            .0
            .borrow_mut()
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn set_css_text(&self, css: &str) {
        let mut node = self.0.borrow_mut();
        node.style.clear();
        for decl in css.split(';') {
            if let Some((property, value)) = decl.split_once(':') {
                let _ = node
                    .style
                    .insert(property.trim().to_owned(), value.trim().to_owned());
            }
        }
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        let selectors = parse_selector_list(selector);
        self.descendants()
            .into_iter()
            .find(|el| selectors.iter().any(|s| el.matches(s)))
    }

    fn append_child(&self, child: &Self) -> Result<(), MotionError> {
        if child == self {
            return Err(MotionError::Dom(
                "HierarchyRequestError: cannot append a node to itself".into(),
            ));
        }
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn viewport_top(&self) -> f64 {
        self.0.borrow().viewport_top
    }
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.trim().to_owned()
}

#[derive(Debug, PartialEq)]
enum AttrTest {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, AttrTest)>,
}

fn parse_selector_list(list: &str) -> Vec<Compound> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_compound)
        .collect()
}

fn parse_compound(selector: &str) -> Compound {
    let mut compound = Compound::default();
    let mut rest = selector;

    let tag_end = rest.find(['.', '#', '[']).unwrap_or(rest.len());
    if tag_end > 0 {
        compound.tag = Some(rest[..tag_end].to_owned());
    }
    rest = &rest[tag_end..];

    while let Some(first) = rest.chars().next() {
        match first {
            '.' | '#' => {
                let body = &rest[1..];
                let end = body.find(['.', '#', '[']).unwrap_or(body.len());
                let name = body[..end].to_owned();
                if first == '.' {
                    compound.classes.push(name);
                } else {
                    compound.attributes.push(("id".to_owned(), AttrTest::Equals(name)));
                }
                rest = &body[end..];
            }
            '[' => {
                let end = rest.find(']').unwrap_or(rest.len());
                compound.attributes.push(parse_attribute(&rest[1..end]));
                rest = rest.get(end + 1..).unwrap_or("");
            }
            _ => break,
        }
    }
    compound
}

fn parse_attribute(body: &str) -> (String, AttrTest) {
    let unquote =
        |v: &str| v.trim_matches(|c: char| c == '"' || c == '\'').to_owned();
    if let Some((name, value)) = body.split_once("^=") {
        (name.to_owned(), AttrTest::Prefix(unquote(value)))
    } else if let Some((name, value)) = body.split_once('=') {
        (name.to_owned(), AttrTest::Equals(unquote(value)))
    } else {
        (body.to_owned(), AttrTest::Exists)
    }
}

/// A document made of a `<head>` and a `<body>` tree.
#[derive(Debug)]
pub(crate) struct MemoryDocument {
    head: MemoryElement,
    body: MemoryElement,
    scroll_y: Cell<f64>,
    smooth_scrolls: RefCell<Vec<f64>>,
}

impl MemoryDocument {
    pub(crate) fn new(body_children: Vec<MemoryElement>) -> Self {
        let body = body_children
            .into_iter()
            .fold(MemoryElement::new("body"), MemoryElement::with_child);
        Self {
            head: MemoryElement::new("head"),
            body,
            scroll_y: Cell::new(0.0),
            smooth_scrolls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    /// Every target handed to [`Document::smooth_scroll_to`], in order.
    pub(crate) fn smooth_scrolls(&self) -> Vec<f64> {
        self.smooth_scrolls.borrow().clone()
    }

    fn all(&self) -> Vec<MemoryElement> {
        let mut all = Vec::new();
        self.head.walk(&mut all);
        self.body.walk(&mut all);
        all
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        let selectors = parse_selector_list(selector);
        self.all()
            .into_iter()
            .filter(|el| selectors.iter().any(|s| el.matches(s)))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.all().into_iter().find(|el| el.id() == id)
    }

    fn create_element(&self, tag: &str) -> Result<MemoryElement, MotionError> {
        Ok(MemoryElement::new(tag))
    }

    fn body(&self) -> Option<MemoryElement> {
        Some(self.body.clone())
    }

    fn head(&self) -> Option<MemoryElement> {
        Some(self.head.clone())
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.smooth_scrolls.borrow_mut().push(top);
    }
}

/// Clock that only moves when a test advances it.
#[derive(Default)]
pub(crate) struct ManualScheduler {
    now: Cell<f64>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<(f64, u64, Task)>>,
    frames: RefCell<Vec<FrameTask>>,
}

impl ManualScheduler {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Move the clock forward, running due timers in deadline order.
    pub(crate) fn advance(&self, delay: Duration) {
        let target = self.now.get() + delay.as_nanos() as f64 / 1e6;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by(|(_, a), (_, b)| {
                        a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
                    })
                    .map(|(i, _)| i);
                due.map(|i| timers.remove(i))
            };
            let Some((at, _, task)) = next else { break };
            self.now.set(at);
            task();
        }
        self.now.set(target);
    }

    /// Run every frame callback queued so far with the current timestamp.
    /// Returns how many ran.
    pub(crate) fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        let count = frames.len();
        let now = self.now.get();
        for frame in frames {
            frame(now);
        }
        count
    }

    pub(crate) fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn set_timeout(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let at = self.now.get() + delay.as_nanos() as f64 / 1e6;
        self.timers.borrow_mut().push((at, seq, task));
    }

    fn request_frame(&self, task: FrameTask) {
        self.frames.borrow_mut().push(task);
    }
}

/// Clipboard whose writes settle only when the test says so.
#[derive(Default)]
pub(crate) struct ScriptedClipboard {
    written: RefCell<Vec<String>>,
    pending: RefCell<Vec<ClipboardCallback>>,
}

impl ScriptedClipboard {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }

    /// Settle every outstanding write as granted.
    pub(crate) fn grant_all(&self) {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for done in pending {
            done(Ok(()));
        }
    }

    /// Settle every outstanding write as denied.
    pub(crate) fn deny_all(&self) {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for done in pending {
            done(Err(MotionError::Clipboard("NotAllowedError".into())));
        }
    }
}

impl Clipboard for ScriptedClipboard {
    fn write_text(&self, text: &str, done: ClipboardCallback) {
        self.written.borrow_mut().push(text.to_owned());
        self.pending.borrow_mut().push(done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDocument {
        MemoryDocument::new(vec![
            MemoryElement::new("nav").with_class("nav"),
            MemoryElement::new("a").with_attr("href", "#docs"),
            MemoryElement::new("a")
                .with_attr("href", "https://example.com")
                .with_attr("target", "_blank"),
            MemoryElement::new("section").with_id("docs").with_child(
                MemoryElement::new("div")
                    .with_class("doc-card")
                    .with_class("wide"),
            ),
        ])
    }

    #[test]
    fn selector_lists_match_in_document_order() {
        let doc = sample();
        let found = doc.query_all(".doc-card, .nav");
        assert_eq!(found.len(), 2);
        assert!(found[0].has_class("nav"));
        assert!(found[1].has_class("doc-card"));
    }

    #[test]
    fn attribute_selectors() {
        let doc = sample();
        assert_eq!(doc.query_all("a[href^=\"#\"]").len(), 1);
        assert_eq!(doc.query_all("a[target=\"_blank\"]").len(), 1);
        assert_eq!(doc.query_all("a[href]").len(), 2);
        assert!(doc.query("section#docs").is_some());
    }

    #[test]
    fn timers_run_in_deadline_order() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = Rc::clone(&log);
            clock.set_timeout(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(tag)),
            );
        }
        clock.advance(Duration::from_millis(250));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(clock.pending_timers(), 1);
        clock.advance(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn inner_html_sets_plain_text() {
        let el = MemoryElement::new("button");
        el.set_inner_html("<svg><path/></svg>\n  Copy\n");
        assert_eq!(el.text_content(), "Copy");
        assert!(el.inner_html().starts_with("<svg>"));
    }
}
