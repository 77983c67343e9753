//! Theme state owned by the application shell.
//!
//! Provides:
//! - `provide_theme_context` creating the reactive theme signal
//! - System theme detection via prefers-color-scheme
//! - Syncing the `dark` class on the document element

use leptos::prelude::*;

use crate::core::Theme;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme state handed to the page. The page only reads `theme` and asks for a
/// toggle; it never writes the signal itself.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let class_list = html.class_list();
            if self.theme.get_untracked().is_dark() {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
}

/// Detect system color scheme preference
#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Create the theme state and provide it as context
pub fn provide_theme_context() -> ThemeContext {
    // The server always renders light; the client switches after hydration
    let theme = RwSignal::new(Theme::Light);
    let ctx = ThemeContext { theme };

    // Follow the system setting until the page is unloaded; an explicit
    // toggle is overridden by the next system change.
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            theme.set(Theme::from_prefers_dark(detect_system_prefers_dark()));
        });

        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media(DARK_QUERY) {
                let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                    move |e: web_sys::MediaQueryListEvent| {
                        theme.set(Theme::from_prefers_dark(e.matches()));
                    },
                );

                let _ = media_query
                    .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

                // Keep the closure alive
                handler.forget();
            }
        }

        Effect::new(move |_| {
            // Subscribe to theme changes
            let _ = theme.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}
