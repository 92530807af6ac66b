//! Page assembly: finds the marked-up elements, wires every controller and
//! exposes one entry point per browser event.
//!
//! [`LandingPage::init`] runs once when the document structure is ready.
//! The platform layer (see the `web` module) forwards scroll, intersection,
//! click, key and load events to the `on_*` methods.

use std::rc::Rc;

use crate::animation::{CounterAnimator, HeroStagger, RevealController};
use crate::copy::CopyButton;
use crate::dom::{Clipboard, Document, Element, Scheduler};
use crate::navigation::{self, MobileMenu};
use crate::options::Options;
use crate::scroll::{ScrollMetrics, ScrollReactor, PROGRESS_BAR_CSS};
use crate::tabs::TabSwitcher;

/// Stylesheet injected into `<head>` for the copy button and the open
/// mobile menu.
pub const STYLESHEET: &str = r"
    .copy-button {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.2);
        color: var(--gray-300);
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        font-size: 0.75rem;
        cursor: pointer;
        display: flex;
        align-items: center;
        gap: 0.25rem;
        transition: all 0.2s ease;
        backdrop-filter: blur(10px);
    }

    .copy-button:hover {
        background: rgba(255, 255, 255, 0.2);
        border-color: rgba(255, 255, 255, 0.3);
        color: var(--white);
    }

    .copy-button:active {
        transform: scale(0.95);
    }

    @media (max-width: 768px) {
        .nav-links.active {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            background: var(--white);
            border-top: 1px solid var(--gray-200);
            padding: 1rem;
            box-shadow: var(--shadow-lg);
        }
    }
";

/// Every controller of one landing page.
pub struct LandingPage<D: Document> {
    document: D,
    options: Options,
    scheduler: Rc<dyn Scheduler>,
    clipboard: Rc<dyn Clipboard>,
    reveals: RevealController<D::Element>,
    counters: CounterAnimator<D::Element>,
    scroll: ScrollReactor,
    tabs: TabSwitcher<D::Element>,
    copy_buttons: Vec<CopyButton<D::Element>>,
    menu: Option<MobileMenu<D::Element>>,
    anchors: Vec<D::Element>,
    external_links: Vec<D::Element>,
    progress_bar: Option<D::Element>,
}

impl<D> LandingPage<D>
where
    D: Document,
    D::Element: 'static,
{
    /// Find the page's elements, put them in their initial state and start
    /// the hero entrance.
    ///
    /// Features whose elements are missing are skipped silently.
    pub fn init(
        document: D,
        options: Options,
        scheduler: Rc<dyn Scheduler>,
        clipboard: Rc<dyn Clipboard>,
    ) -> Self {
        inject_stylesheet(&document);
        let progress_bar = create_progress_bar(&document, &options);

        let scroll = ScrollReactor::new(
            document.query(&options.scroll.nav_selector),
            progress_bar.clone(),
            document.query(&options.scroll.parallax_selector),
            &options.scroll,
        );

        let reveals = RevealController::new(
            document.query_all(&options.reveal.selector),
            &options.reveal,
        );

        let copy_buttons: Vec<_> = document
            .query_all(&options.copy.block_selector)
            .into_iter()
            .filter_map(|block| {
                CopyButton::attach(&document, block, &options.copy)
                    .map_err(|e| log::debug!("copy button not attached: {e}"))
                    .ok()
            })
            .collect();

        let counters = CounterAnimator::new(
            document.query_all(&options.counter.selector),
            options.counter.clone(),
            Rc::clone(&scheduler),
        );

        let menu = document
            .query(&options.navigation.menu_button_selector)
            .map(|button| {
                MobileMenu::new(
                    button,
                    document.query(&options.navigation.nav_links_selector),
                )
            });

        let anchors = document.query_all(&options.navigation.anchor_selector);
        let external_links =
            document.query_all(&options.navigation.external_selector);

        let tabs = TabSwitcher::new(
            document.query_all(&options.tabs.button_selector),
            document.query_all(&options.tabs.panel_selector),
            options.tabs.clone(),
        );

        let hero_count = HeroStagger::from_options(&options.hero).start(
            document.query_all(&options.hero.selector),
            &options.hero,
            &*scheduler,
        );

        log::info!(
            "landing page ready: {} reveal targets, {} hero elements, {} \
             counters, {} tab buttons, {} code blocks",
            reveals.targets().len(),
            hero_count,
            counters.targets().count(),
            tabs.buttons().len(),
            copy_buttons.len(),
        );

        Self {
            document,
            options,
            scheduler,
            clipboard,
            reveals,
            counters,
            scroll,
            tabs,
            copy_buttons,
            menu,
            anchors,
            external_links,
            progress_bar,
        }
    }

    /// The document this page controls.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Options the page was initialised with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The injected progress bar, if it could be created.
    #[must_use]
    pub fn progress_bar(&self) -> Option<&D::Element> {
        self.progress_bar.as_ref()
    }

    /// Elements to observe for viewport reveals.
    #[must_use]
    pub fn reveal_targets(&self) -> &[D::Element] {
        self.reveals.targets()
    }

    /// Stats to observe for the counter animation.
    #[must_use]
    pub fn stat_targets(&self) -> Vec<D::Element> {
        self.counters.targets().cloned().collect()
    }

    /// Tab buttons, in document order.
    #[must_use]
    pub fn tab_buttons(&self) -> &[D::Element] {
        self.tabs.buttons()
    }

    /// Injected copy buttons, in code-block order.
    #[must_use]
    pub fn copy_buttons(&self) -> Vec<D::Element> {
        self.copy_buttons.iter().map(|c| c.button().clone()).collect()
    }

    /// In-page anchor links.
    #[must_use]
    pub fn anchors(&self) -> &[D::Element] {
        &self.anchors
    }

    /// Links that open a new tab.
    #[must_use]
    pub fn external_links(&self) -> &[D::Element] {
        &self.external_links
    }

    /// The mobile menu button, if present.
    #[must_use]
    pub fn menu_button(&self) -> Option<&D::Element> {
        self.menu.as_ref().map(MobileMenu::button)
    }

    /// Recompute the scroll-driven state.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        self.scroll.on_scroll(metrics);
    }

    /// Scroll offset of the most recent scroll event.
    #[must_use]
    pub fn last_scroll_top(&self) -> f64 {
        self.scroll.last_scroll_top()
    }

    /// Viewport intersection report for a reveal target.
    pub fn on_reveal_intersection(
        &mut self,
        target: &D::Element,
        is_intersecting: bool,
    ) -> bool {
        self.reveals.on_intersection(target, is_intersecting)
    }

    /// Visibility report for a stat. Returns `true` when the watcher should
    /// stop observing it.
    pub fn on_stat_intersection(
        &mut self,
        target: &D::Element,
        is_intersecting: bool,
    ) -> bool {
        self.counters.on_intersection(target, is_intersecting)
    }

    /// Click on the tab button at `index`.
    pub fn on_tab_click(&self, index: usize) -> Option<D::Element> {
        self.tabs.activate(&self.document, index)
    }

    /// Click on the copy button at `index`.
    pub fn on_copy_click(&self, index: usize) -> bool {
        self.copy_buttons.get(index).is_some_and(|copy| {
            copy.on_click(
                &self.options.copy,
                &*self.clipboard,
                Rc::clone(&self.scheduler),
            )
        })
    }

    /// Click on an in-page link. The default jump is always suppressed by
    /// the caller; this scrolls to the target if it exists.
    pub fn on_anchor_click(&self, href: &str) -> Option<f64> {
        navigation::fragment_id(href).and_then(|id| self.scroll_to_section(id))
    }

    /// Smooth-scroll to the section with `id`.
    pub fn scroll_to_section(&self, id: &str) -> Option<f64> {
        navigation::scroll_to_section(
            &self.document,
            id,
            self.options.navigation.header_offset,
        )
    }

    /// Click on the mobile menu button.
    pub fn on_menu_click(&self) {
        if let Some(menu) = &self.menu {
            menu.toggle(&self.options.navigation.active_class);
        }
    }

    /// Key press anywhere on the page. Returns the number of elements
    /// deactivated.
    pub fn on_key(&self, key: &str) -> usize {
        if key == self.options.navigation.close_key {
            navigation::deactivate_all(
                &self.document,
                &self.options.navigation.active_class,
            )
        } else {
            0
        }
    }

    /// Click on the external link at `index`.
    pub fn on_external_click(&self, index: usize) {
        if let Some(link) = self.external_links.get(index) {
            navigation::dim_external_link(
                link,
                &self.options.navigation,
                &self.scheduler,
            );
        }
    }

    /// Window `load` event.
    pub fn on_load(&self, load_time_ms: f64) {
        log::info!("Page load time: {load_time_ms}ms");
    }
}

fn inject_stylesheet<D: Document>(document: &D) {
    let Some(head) = document.head() else {
        return;
    };
    let injected = document.create_element("style").and_then(|style| {
        style.set_text_content(STYLESHEET);
        head.append_child(&style)
    });
    if let Err(e) = injected {
        log::debug!("stylesheet not injected: {e}");
    }
}

fn create_progress_bar<D: Document>(
    document: &D,
    options: &Options,
) -> Option<D::Element> {
    let body = document.body()?;
    let created = document.create_element("div").and_then(|bar| {
        bar.add_class(&options.scroll.progress_class);
        bar.set_css_text(PROGRESS_BAR_CSS);
        body.append_child(&bar).map(|()| bar)
    });
    created
        .map_err(|e| log::debug!("progress bar not created: {e}"))
        .ok()
}
