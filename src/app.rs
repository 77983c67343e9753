use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::core::AuthView;
use crate::ui::{AuthModal, LandingPage, NotFoundPage, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = provide_theme_context();

    // Auth dialog currently requested by the page, if any
    let auth_view = RwSignal::new(None::<AuthView>);

    let on_open_auth_modal = Callback::new(move |view: AuthView| auth_view.set(Some(view)));
    let on_toggle_theme = Callback::new(move |_: ()| theme.toggle());

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/pixelforge.css"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route
                        path=path!("/")
                        view=move || view! {
                            <LandingPage
                                on_open_auth_modal=on_open_auth_modal
                                theme=theme.theme
                                on_toggle_theme=on_toggle_theme
                            />
                        }
                    />
                </Routes>
            </main>
        </Router>

        <AuthModal selected=auth_view />
    }
}
