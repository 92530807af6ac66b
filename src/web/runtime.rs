//! Browser timers, animation frames and clipboard.

use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Performance, Window};

use super::dom::js_error;
use crate::dom::{Clipboard, ClipboardCallback, FrameTask, Scheduler, Task};
use crate::error::MotionError;

/// `setTimeout`, `requestAnimationFrame` and `performance.now()` of one
/// window.
pub struct BrowserScheduler {
    window: Window,
    performance: Option<Performance>,
}

impl BrowserScheduler {
    /// Scheduler bound to `window`.
    pub fn new(window: Window) -> Self {
        let performance = window.performance();
        Self {
            window,
            performance,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn now(&self) -> f64 {
        self.performance.as_ref().map_or(0.0, Performance::now)
    }

    fn set_timeout(&self, delay: Duration, task: Task) {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis,
            )
        {
            log::debug!("setTimeout failed: {}", js_error(&e));
        }
    }

    fn request_frame(&self, task: FrameTask) {
        let callback = Closure::once_into_js(move |timestamp: f64| task(timestamp));
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            log::debug!("requestAnimationFrame failed: {}", js_error(&e));
        }
    }
}

/// `navigator.clipboard`, settled through a spawned promise future.
pub struct BrowserClipboard {
    window: Window,
}

impl BrowserClipboard {
    /// Clipboard of `window`'s navigator.
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str, done: ClipboardCallback) {
        let promise = self.window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| {
                    MotionError::Clipboard(
                        e.as_string().unwrap_or_else(|| format!("{e:?}")),
                    )
                });
            done(result);
        });
    }
}
