//! Scroll geometry: per-element progress through a viewport band and page-level scroll state.

/// Scroll offset (px) after which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Edge of an element or of the viewport, as a fraction of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// The moment an edge of the tracked element lines up with an edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub viewport: Edge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBand {
    pub enter: Intersection,
    pub exit: Intersection,
}

impl Default for OffsetBand {
    /// Starts when the element's top meets the viewport's bottom and ends when the element's
    /// bottom meets the viewport's top.
    fn default() -> Self {
        Self {
            enter: Intersection {
                target: Edge::Start,
                viewport: Edge::End,
            },
            exit: Intersection {
                target: Edge::End,
                viewport: Edge::Start,
            },
        }
    }
}

/// Bounding box of an element relative to the viewport, as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    band: OffsetBand,
}

impl ScrollTracker {
    pub fn new(band: OffsetBand) -> Self {
        Self { band }
    }

    /// Progress of `rect` through the band: 0 at the enter intersection, 1 at the exit
    /// intersection, linear in scroll distance and unclamped outside the band.
    ///
    /// Returns `None` while the element is not mounted.
    pub fn progress(&self, rect: Option<ElementRect>, viewport_height: f64) -> Option<f64> {
        let rect = rect?;
        // rect.top at which each intersection happens; it falls as the page scrolls down
        let top_at = |i: Intersection| {
            i.viewport.fraction() * viewport_height - i.target.fraction() * rect.height
        };
        let enter = top_at(self.band.enter);
        let exit = top_at(self.band.exit);
        let span = enter - exit;
        if span.abs() < f64::EPSILON {
            return Some(if rect.top <= exit { 1.0 } else { 0.0 });
        }
        Some((enter - rect.top) / span)
    }
}

/// Fraction of the document scrolled, clamped to `[0, 1]`.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}
