//! Dropdown open/closed state.
//!
//! Panels are addressed by their index in document order. At most one panel is
//! open; every other panel is hidden whenever the state changes.

/// Which panel, if any, is currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    panel_count: usize,
    open: Option<usize>,
}

impl DropdownState {
    /// State for `panel_count` panels, all hidden.
    pub fn new(panel_count: usize) -> Self {
        Self { panel_count, open: None }
    }

    /// Number of panels tracked.
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Currently open panel.
    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    /// Whether panel `index` should be displayed.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Trigger click: flip `index`, close everything else.
    ///
    /// Out-of-range indices change nothing.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.panel_count {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    /// Outside click: hide every panel.
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// `(panel index, shown)` for every panel, in order.
    pub fn visibility(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.panel_count).map(move |i| (i, self.is_open(i)))
    }
}

/// CSS `display` value for a panel.
pub fn display_value(shown: bool) -> &'static str {
    if shown {
        "block"
    } else {
        "none"
    }
}
