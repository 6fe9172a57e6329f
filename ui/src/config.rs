/// Pixel and timing constants shared by the scroll tracker, the navigator
/// and the staggered card animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// `scroll_y` above this marks the page as scrolled (navbar shadow).
    pub scrolled_threshold: f64,
    /// Viewport-relative line a section must straddle to count as in view.
    pub marker_line: f64,
    /// Height reserved for the fixed navbar when scrolling to a section.
    pub header_offset: f64,
    /// Animation delay added per card, in milliseconds.
    pub stagger_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            marker_line: 100.0,
            header_offset: 80.0,
            stagger_ms: 100,
        }
    }
}

impl ScrollConfig {
    /// Inline style staggering the `index`-th card of a grid.
    pub fn stagger(&self, index: usize) -> String {
        format!("animation-delay: {}ms", index as u64 * self.stagger_ms as u64)
    }
}
