//! Core page logic for the portfolio site
//!
//! Everything here is target independent. Time, pointer positions and
//! viewport state come in as arguments so the browser layer in `ui` stays
//! a thin binding and the behaviour can be tested natively.

#[cfg(feature = "ssr")]
pub mod capture;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod security;

pub mod desk;
pub mod disclosure;
pub mod effects;
pub mod navigation;
pub mod sequence;
pub mod site;
pub mod spotlight;
pub mod textile;
pub mod wave;

#[cfg(test)]
mod tests;
