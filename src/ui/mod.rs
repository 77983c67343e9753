pub mod auth_modal;
pub mod effects;
pub mod icon;
pub mod pages;
pub mod theme;

pub use auth_modal::AuthModal;
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use theme::{ThemeContext, provide_theme_context};
