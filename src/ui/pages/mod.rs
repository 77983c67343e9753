//! Application pages module
//!
//! - Landing page (home)
//! - Not found page (router fallback)

mod landing;
mod not_found;

pub use landing::{LandingHandlers, LandingPage, theme_icon};
pub use not_found::NotFoundPage;
