//! Page content, value types and the DOM-free models behind the landing
//! page's client-side effects

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod theme;

pub use auth::AuthView;
pub use parallax::{GridCell, ParallaxField, Translation, Viewport};
pub use reveal::{RevealChange, RevealTracker};
pub use theme::Theme;
