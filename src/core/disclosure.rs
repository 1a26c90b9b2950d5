//! Disclosure groups (accordions and tab-like cards)
//!
//! A group holds a fixed number of panels of which at most one is open.
//! On wide viewports the group behaves like tabs: something is always open
//! and re-activating the open panel does nothing. On narrow viewports the
//! open panel can be collapsed by activating it again.

/// Media query selecting the wide layout
pub const WIDE_VIEWPORT_QUERY: &str = "(min-width: 768px)";

/// Exclusivity rule currently in force
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Narrow,
}

impl Layout {
    pub fn from_wide(matches: bool) -> Self {
        if matches { Layout::Wide } else { Layout::Narrow }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureGroup {
    open: Option<usize>,
    len: usize,
    layout: Layout,
    default_panel: usize,
}

impl DisclosureGroup {
    /// Wide groups start with the first panel open, narrow ones collapsed
    pub fn new(len: usize, layout: Layout) -> Self {
        let mut group = Self {
            open: None,
            len,
            layout,
            default_panel: 0,
        };
        group.ensure_default();
        group
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Trigger for panel `index` was activated. Returns whether state changed.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }

        match (self.layout, self.open == Some(index)) {
            (Layout::Wide, true) => false,
            (Layout::Narrow, true) => {
                self.open = None;
                true
            }
            (_, false) => {
                self.open = Some(index);
                true
            }
        }
    }

    /// Viewport crossed the breakpoint
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.ensure_default();
    }

    fn ensure_default(&mut self) {
        if self.layout == Layout::Wide && self.open.is_none() && self.default_panel < self.len {
            self.open = Some(self.default_panel);
        }
    }
}

/// Trigger that should receive focus after `key` is pressed on trigger
/// `current`. Arrows wrap around; Home/End jump to the ends.
pub fn focus_target(current: usize, key: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match key {
        "ArrowRight" | "ArrowDown" => Some((current + 1) % len),
        "ArrowLeft" | "ArrowUp" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}
