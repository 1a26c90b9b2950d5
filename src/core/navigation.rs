//! Sequential page navigation
//!
//! Project pages form an ordered group. Arrow keys and horizontal swipes move
//! to the neighbouring page; Home and Escape return to the landing page.
//! Navigation always ends in a full document load, so nothing here keeps
//! state beyond the current page's position.

use std::time::Duration;

/// Minimum horizontal travel for a touch gesture to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Body fade before the next document is requested
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Canonical order of the project pages
pub const PROJECT_PAGES: &[&str] = &[
    "junipers-clompass.html",
    "responsible-ai.html",
    "black-eco-feminisms.html",
    "show-me-your-colors.html",
    "art.html",
];

/// An ordered set of pages sharing one navigation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGroup {
    /// Page file names in navigation order
    pub pages: &'static [&'static str],
    /// Path prefix the page names are served under
    pub base: &'static str,
    /// Where Home/Escape lead
    pub landing: &'static str,
    pub fade: Duration,
}

/// The project pages group
pub const PROJECT_GROUP: PageGroup = PageGroup {
    pages: PROJECT_PAGES,
    base: "/projects/",
    landing: "/",
    fade: FADE_DURATION,
};

impl PageGroup {
    /// Absolute URL of a page in this group
    pub fn href(&self, page: &str) -> String {
        format!("{}{}", self.base, page)
    }

    /// Position of the page named by the final segment of `path`
    pub fn index_of(&self, path: &str) -> Option<usize> {
        let segment = path.rsplit('/').next().unwrap_or(path);
        self.pages.iter().position(|page| *page == segment)
    }
}

/// Navigation intent produced by a key or gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
    Landing,
}

impl NavAction {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavAction::Previous),
            "ArrowRight" => Some(NavAction::Next),
            "Home" | "Escape" => Some(NavAction::Landing),
            _ => None,
        }
    }

    /// Classify a touch gesture from its start and end `screenX`.
    ///
    /// Swiping left (finger moves toward smaller x) advances.
    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff > SWIPE_THRESHOLD_PX {
            Some(NavAction::Next)
        } else if diff < -SWIPE_THRESHOLD_PX {
            Some(NavAction::Previous)
        } else {
            None
        }
    }
}

/// Navigation controller bound to the page currently displayed
#[derive(Debug, Clone, Copy)]
pub struct PageNavigator {
    group: PageGroup,
    current: Option<usize>,
}

impl PageNavigator {
    /// Resolve the current page from a URL path
    pub fn new(group: PageGroup, path: &str) -> Self {
        Self {
            current: group.index_of(path),
            group,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn group(&self) -> &PageGroup {
        &self.group
    }

    /// Destination URL for `action`, or `None` when it is a no-op here
    pub fn target(&self, action: NavAction) -> Option<String> {
        match action {
            NavAction::Landing => Some(self.group.landing.to_string()),
            _ => self.neighbour(action).map(|page| self.group.href(page)),
        }
    }

    pub fn previous_page(&self) -> Option<&'static str> {
        self.neighbour(NavAction::Previous)
    }

    pub fn next_page(&self) -> Option<&'static str> {
        self.neighbour(NavAction::Next)
    }

    /// Adjacent page in the group; the landing page is not a neighbour
    fn neighbour(&self, action: NavAction) -> Option<&'static str> {
        let current = self.current?;
        let index = match action {
            NavAction::Previous => current.checked_sub(1)?,
            NavAction::Next => current + 1,
            NavAction::Landing => return None,
        };
        self.group.pages.get(index).copied()
    }
}
