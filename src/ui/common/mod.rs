//! Common UI building blocks shared by several pages

pub mod keyboard;
pub mod tabs;

pub use keyboard::{Kbd, KeyboardHint, KeyboardHints};
pub use tabs::{TabItem, Tabs};
