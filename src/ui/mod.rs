pub mod accordion;
pub mod athena;
pub mod common;
#[cfg(not(feature = "ssr"))]
pub mod dom;
pub mod icon;
pub mod mute;
pub mod page_nav;
pub mod pages;
pub mod paper;
pub mod project_list;
pub mod signup;
pub mod spotlight;
pub mod textile_canvas;
pub mod wave_text;

pub use icon::{Icon, icons};
