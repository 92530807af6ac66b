//! Copy-to-clipboard buttons on code samples.

use std::rc::Rc;

use crate::dom::{Clipboard, Document, Element, Scheduler};
use crate::error::MotionError;
use crate::options::CopyOptions;

/// Button content in the idle state.
pub const COPY_LABEL: &str = r#"
            <svg width="16" height="16" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 16H6a2 2 0 01-2-2V6a2 2 0 012-2h8a2 2 0 012 2v2m-6 12h8a2 2 0 002-2v-8a2 2 0 00-2-2h-8a2 2 0 00-2 2v8a2 2 0 002 2z"/>
            </svg>
            Copy
        "#;

/// Button content while the confirmation is shown.
pub const COPIED_LABEL: &str = r#"
            <svg width="16" height="16" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
            </svg>
            Copied!
        "#;

/// A copy button attached to one code block.
#[derive(Debug, Clone)]
pub struct CopyButton<E> {
    block: E,
    button: E,
}

impl<E: Element + 'static> CopyButton<E> {
    /// Create the button and append it to `block`.
    pub fn attach<D>(
        document: &D,
        block: E,
        options: &CopyOptions,
    ) -> Result<Self, MotionError>
    where
        D: Document<Element = E>,
    {
        let button = document.create_element("button")?;
        button.add_class(&options.button_class);
        button.set_inner_html(COPY_LABEL);
        block.set_style("position", "relative");
        block.append_child(&button)?;
        Ok(Self { block, button })
    }

    /// The injected button.
    #[must_use]
    pub fn button(&self) -> &E {
        &self.button
    }

    /// Handle a click: copy the code text and, once the write is granted,
    /// show the confirmation for the configured duration.
    ///
    /// A denied write leaves the button untouched. Returns `false` when the
    /// block has no code element to copy from.
    pub fn on_click(
        &self,
        options: &CopyOptions,
        clipboard: &dyn Clipboard,
        scheduler: Rc<dyn Scheduler>,
    ) -> bool {
        let Some(code) = self.block.query_selector(&options.code_selector)
        else {
            log::debug!("code block without `{}` element", options.code_selector);
            return false;
        };

        let button = self.button.clone();
        let confirm = options.confirm();
        clipboard.write_text(
            &code.text_content(),
            Box::new(move |result: Result<(), MotionError>| match result {
                Ok(()) => {
                    button.set_inner_html(COPIED_LABEL);
                    scheduler.set_timeout(
                        confirm,
                        Box::new(move || button.set_inner_html(COPY_LABEL)),
                    );
                }
                Err(e) => log::warn!("copy failed: {e}"),
            }),
        );
        true
    }
}
