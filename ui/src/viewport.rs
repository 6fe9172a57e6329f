//! Scroll-spy and smooth navigation over an abstract host page.

use crate::config::ScrollConfig;
use crate::state::{Section, ViewState};

/// Viewport-relative vertical extent of an element, in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Inclusive at both edges.
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// What the page needs from its host: element lookup, bounding boxes and
/// the window scroll position.
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Bounding rectangle of the element with `id`, if it exists.
    fn element_rect(&self, id: &str) -> Option<Rect>;

    /// Request an animated scroll so that `top` becomes the page offset.
    fn scroll_to(&self, top: f64);
}

/// First section, in document order, straddling the marker line.
pub fn section_in_view<V: Viewport + ?Sized>(viewport: &V, cfg: &ScrollConfig) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        viewport
            .element_rect(section.id())
            .is_some_and(|rect| rect.straddles(cfg.marker_line))
    })
}

/// Absolute page offset that puts element `id` just under the navbar.
pub fn scroll_target<V: Viewport + ?Sized>(viewport: &V, id: &str, cfg: &ScrollConfig) -> Option<f64> {
    let rect = viewport.element_rect(id)?;
    Some(rect.top + viewport.scroll_y() - cfg.header_offset)
}

impl ViewState {
    /// Scroll listener body: recompute `scrolled` and the highlighted section.
    pub fn track<V: Viewport + ?Sized>(&mut self, viewport: &V, cfg: &ScrollConfig) {
        let scrolled = viewport.scroll_y() > cfg.scrolled_threshold;
        self.observe(scrolled, section_in_view(viewport, cfg));
    }

    /// Scrolls to `id` when it exists and closes the menu either way.
    /// Returns the requested offset.
    pub fn navigate<V: Viewport + ?Sized>(&mut self, viewport: &V, id: &str, cfg: &ScrollConfig) -> Option<f64> {
        self.close_menu();
        let target = scroll_target(viewport, id, cfg)?;
        viewport.scroll_to(target);
        Some(target)
    }
}
