//! WebAssembly entry points and browser event wiring.
//!
//! `start` runs when the module is instantiated. It waits for
//! `DOMContentLoaded` if the document is still loading, builds a
//! [`LandingPage`] over the live document and attaches one listener per
//! event source. Listeners share the page through `Rc<RefCell<_>>` and
//! live for the rest of the page's lifetime.

mod dom;
mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Window,
};

pub use self::dom::{BrowserDocument, WebElement};
use self::dom::js_error;
pub use self::runtime::{BrowserClipboard, BrowserScheduler};
use crate::dom::{Clipboard, Element, Scheduler};
use crate::error::MotionError;
use crate::navigation;
use crate::options::{Options, OPTIONS_ELEMENT_ID};
use crate::page::LandingPage;

type SharedPage = Rc<RefCell<LandingPage<BrowserDocument>>>;

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second instantiation finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    let document = BrowserDocument::current().map_err(to_js)?;
    if document.raw().ready_state() == "loading" {
        let target = document.raw().clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = boot(document) {
                log::warn!("landing page not initialised: {e}");
            }
        });
        target
            .add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.unchecked_ref(),
            )
            .map_err(|e| to_js(js_error(&e)))?;
        Ok(())
    } else {
        boot(document).map_err(to_js)
    }
}

/// Smooth-scroll to the section with `section_id`, leaving room for the
/// fixed header. Does nothing when the section does not exist.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    let Ok(document) = BrowserDocument::current() else {
        return;
    };
    let offset = read_options(&document).navigation.header_offset;
    let _ = navigation::scroll_to_section(&document, section_id, offset);
}

fn to_js(error: MotionError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn boot(document: BrowserDocument) -> Result<(), MotionError> {
    let window = document.window().clone();
    highlight_code(&window);

    let options = read_options(&document);
    let scheduler: Rc<dyn Scheduler> =
        Rc::new(BrowserScheduler::new(window.clone()));
    let clipboard: Rc<dyn Clipboard> =
        Rc::new(BrowserClipboard::new(window.clone()));
    let raw_document = document.raw().clone();

    let page: SharedPage = Rc::new(RefCell::new(LandingPage::init(
        document, options, scheduler, clipboard,
    )));

    wire_scroll(&window, &page)?;
    wire_observers(&page)?;
    wire_clicks(&page)?;
    wire_keys(&raw_document, &page)?;
    wire_load(&window, &page)
}

/// Options from the page's TOML block, or the defaults.
fn read_options(document: &BrowserDocument) -> Options {
    let Some(block) = document.raw().get_element_by_id(OPTIONS_ELEMENT_ID)
    else {
        return Options::default();
    };
    let text = block.text_content().unwrap_or_default();
    Options::from_toml_str(&text).unwrap_or_else(|e| {
        log::warn!("ignoring #{OPTIONS_ELEMENT_ID}: {e}");
        Options::default()
    })
}

/// Run `hljs.highlightAll()` when highlight.js is loaded.
fn highlight_code(window: &Window) {
    let global: &JsValue = window.as_ref();
    let Ok(hljs) = js_sys::Reflect::get(global, &JsValue::from_str("hljs"))
    else {
        return;
    };
    if hljs.is_undefined() || hljs.is_null() {
        return;
    }
    let highlight_all = js_sys::Reflect::get(&hljs, &JsValue::from_str("highlightAll"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(highlight_all) = highlight_all {
        if let Err(e) = highlight_all.call0(&hljs) {
            log::debug!("hljs.highlightAll failed: {}", js_error(&e));
        }
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), MotionError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(&e))?;
    closure.forget();
    Ok(())
}

fn wire_scroll(window: &Window, page: &SharedPage) -> Result<(), MotionError> {
    let page = Rc::clone(page);
    listen(window, "scroll", move |_| {
        let mut page = page.borrow_mut();
        let metrics = page.document().scroll_metrics();
        page.on_scroll(&metrics);
    })
}

/// Watch `targets` for viewport intersection. `on_entry` returns whether
/// the target should stop being watched.
fn observe(
    targets: &[WebElement],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&WebElement, bool) -> bool + 'static,
) -> Result<(), MotionError> {
    if targets.is_empty() {
        return Ok(());
    }
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                else {
                    continue;
                };
                let target = entry.target();
                let Some(element) = WebElement::from_element(target.clone())
                else {
                    continue;
                };
                if on_entry(&element, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(|e| js_error(&e))?;
    for target in targets {
        observer.observe(target.html());
    }
    callback.forget();
    Ok(())
}

fn wire_observers(page: &SharedPage) -> Result<(), MotionError> {
    let (reveal_targets, stat_targets, options) = {
        let page = page.borrow();
        (
            page.reveal_targets().to_vec(),
            page.stat_targets(),
            page.options().clone(),
        )
    };

    let reveal_page = Rc::clone(page);
    observe(
        &reveal_targets,
        options.reveal.threshold,
        Some(options.reveal.root_margin.as_str()),
        move |target, intersecting| {
            let _ = reveal_page
                .borrow_mut()
                .on_reveal_intersection(target, intersecting);
            false
        },
    )?;

    let stat_page = Rc::clone(page);
    observe(
        &stat_targets,
        options.counter.threshold,
        None,
        move |target, intersecting| {
            stat_page
                .borrow_mut()
                .on_stat_intersection(target, intersecting)
        },
    )
}

fn wire_clicks(page: &SharedPage) -> Result<(), MotionError> {
    let (tabs, copies, anchors, external, menu) = {
        let page = page.borrow();
        (
            page.tab_buttons().to_vec(),
            page.copy_buttons(),
            page.anchors().to_vec(),
            page.external_links().to_vec(),
            page.menu_button().cloned(),
        )
    };

    for (index, button) in tabs.iter().enumerate() {
        let page = Rc::clone(page);
        listen(button.html(), "click", move |_| {
            let _ = page.borrow().on_tab_click(index);
        })?;
    }

    for (index, button) in copies.iter().enumerate() {
        let page = Rc::clone(page);
        listen(button.html(), "click", move |_| {
            let _ = page.borrow().on_copy_click(index);
        })?;
    }

    for link in &anchors {
        let page = Rc::clone(page);
        let target = link.clone();
        listen(link.html(), "click", move |event| {
            event.prevent_default();
            if let Some(href) = target.attribute("href") {
                let _ = page.borrow().on_anchor_click(&href);
            }
        })?;
    }

    for (index, link) in external.iter().enumerate() {
        let page = Rc::clone(page);
        listen(link.html(), "click", move |_| {
            page.borrow().on_external_click(index);
        })?;
    }

    if let Some(button) = menu {
        let page = Rc::clone(page);
        listen(button.html(), "click", move |_| page.borrow().on_menu_click())?;
    }
    Ok(())
}

fn wire_keys(
    document: &web_sys::Document,
    page: &SharedPage,
) -> Result<(), MotionError> {
    let page = Rc::clone(page);
    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            let _ = page.borrow().on_key(&key);
        }
    })
}

fn wire_load(window: &Window, page: &SharedPage) -> Result<(), MotionError> {
    let page = Rc::clone(page);
    let timing_window = window.clone();
    listen(window, "load", move |_| {
        if let Some(performance) = timing_window.performance() {
            let timing = performance.timing();
            page.borrow()
                .on_load(timing.load_event_end() - timing.navigation_start());
        }
    })
}
