//! Small entrance and click effects for list items

use std::time::Duration;

/// Delay between consecutive items of a staggered reveal
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Length of the reveal transition itself
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Lifetime of a ripple overlay
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);

/// Diameter of a freshly spawned ripple
pub const RIPPLE_SIZE_PX: f64 = 10.0;

/// Reveal delay of the item at `index`
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Time until the last of `count` staggered items has finished revealing
pub fn reveal_settled(count: usize) -> Duration {
    stagger_delay(count.saturating_sub(1)) + REVEAL_DURATION
}

/// A ripple spawned by a click inside an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    /// Offset from the element's left edge
    pub x: f64,
    /// Offset from the element's top edge
    pub y: f64,
}

impl Ripple {
    /// Ripple at a viewport click position inside an element whose
    /// bounding box starts at (`left`, `top`)
    pub fn at(id: u64, client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            id,
            x: client_x - left,
            y: client_y - top,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.0}px; top: {:.0}px; width: {size}px; height: {size}px;",
            self.x,
            self.y,
            size = RIPPLE_SIZE_PX
        )
    }
}
