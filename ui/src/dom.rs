use anyhow::{Context, Result, anyhow};
use leptos::ev;
use leptos::leptos_dom::helpers::{WindowListenerHandle, window_event_listener};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::viewport::{Rect, Viewport};

/// The live browser window.
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().context("no global `window`")?;
        let document = window.document().context("window has no document")?;
        Ok(Self { window, document })
    }

    /// URL fragment without the leading `#`, if any.
    pub fn fragment(&self) -> Option<String> {
        let hash = self.window.location().hash().ok()?;
        let id = hash.trim_start_matches('#');
        (!id.is_empty()).then(|| id.to_owned())
    }

    /// Navigates the whole window, used for `mailto:` hand-off.
    pub fn open(&self, href: &str) -> Result<()> {
        self.window
            .location()
            .set_href(href)
            .map_err(|e| anyhow!("failed to open {href}: {e:?}"))
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn element_rect(&self, id: &str) -> Option<Rect> {
        let rect = self.document.get_element_by_id(id)?.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Window `scroll` subscription. Dropping it removes the listener.
pub struct ScrollSpy {
    handle: Option<WindowListenerHandle>,
}

impl ScrollSpy {
    pub fn attach(on_scroll: impl Fn() + Send + Sync + 'static) -> Self {
        let handle = window_event_listener(ev::scroll, move |_| on_scroll());
        log::debug!("scroll spy attached");
        Self { handle: Some(handle) }
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
            log::debug!("scroll spy detached");
        }
    }
}
