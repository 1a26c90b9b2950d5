//! Application pages
//!
//! - Landing page (home)
//! - Desk page
//! - Project pages
//! - 404 page

mod desk;
mod landing;
mod not_found;
mod project;

pub use desk::DeskPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use project::ProjectPage;
