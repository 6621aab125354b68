//! Slide index cycling.

/// Current slide over a fixed number of slides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    slide_count: usize,
}

impl SlideCursor {
    /// Cursor at slide 0.
    pub fn new(slide_count: usize) -> Self {
        Self { index: 0, slide_count }
    }

    /// Current index, always `< slide_count` (or 0 with no slides).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// One tick: step forward, wrap to 0 at the end.
    pub fn advance(&mut self) -> usize {
        let next = self.index.saturating_add(1);
        self.index = if next >= self.slide_count { 0 } else { next };
        self.index
    }

    /// Track transform for the current index.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index.saturating_mul(100))
    }
}
