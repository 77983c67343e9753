//! Auth dialog shell rendered by the application around the landing page.
//!
//! The page only asks for a view through its `on_open_auth_modal` callback;
//! this component owns nothing but presentation and closing.

use leptos::prelude::*;

use crate::core::AuthView;
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Modal showing the selected auth view; `None` hides it
#[component]
pub fn AuthModal(selected: RwSignal<Option<AuthView>>) -> impl IntoView {
    let close = move || selected.set(None);

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && selected.with_untracked(|v| v.is_some()) {
                selected.set(None);
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <Show when=move || selected.get().is_some()>
            <div
                class="fixed inset-0 z-[60] flex items-center justify-center p-4 auth-backdrop"
                role="dialog"
                aria-modal="true"
                on:click=move |e| {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("auth-backdrop") {
                                close();
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            >
                <div class="relative w-full max-w-md bg-theme-primary border border-theme rounded-2xl shadow-xl p-8">
                    <button
                        class="absolute top-4 right-4 p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                        on:click=move |_| close()
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="w-5 h-5" />
                    </button>
                    {move || selected.get().map(|current| {
                        let (prompt, link) = current.switch_prompt();
                        view! {
                            <h2 class="text-2xl font-bold text-theme-primary mb-2">{current.title()}</h2>
                            <p class="text-theme-secondary mb-8">{current.subtitle()}</p>
                            <p class="text-sm text-theme-secondary text-center">
                                {prompt}" "
                                <button
                                    class="font-medium text-accent-primary hover:underline"
                                    on:click=move |_| selected.set(Some(current.other()))
                                >
                                    {link}
                                </button>
                            </p>
                        }
                    })}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_no_view() {
        Owner::new().with(|| {
            let selected = RwSignal::new(None);
            let html = view! { <AuthModal selected=selected /> }.to_html();
            assert!(!html.contains("role=\"dialog\""));
        });
    }

    #[test]
    fn test_renders_register_view() {
        Owner::new().with(|| {
            let selected = RwSignal::new(Some(AuthView::Register));
            let html = view! { <AuthModal selected=selected /> }.to_html();
            assert!(html.contains("role=\"dialog\""));
            assert!(html.contains(AuthView::Register.title()));
            assert!(html.contains("Log in"));
        });
    }

    #[test]
    fn test_renders_login_view() {
        Owner::new().with(|| {
            let selected = RwSignal::new(Some(AuthView::Login));
            let html = view! { <AuthModal selected=selected /> }.to_html();
            assert!(html.contains(AuthView::Login.title()));
            assert!(html.contains("Create an account"));
        });
    }
}
