use leptos::prelude::*;

/// Icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=icon_path(name)
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

pub fn icon_path(name: &str) -> String {
    format!("/icons/{}.svg", name)
}

/// Named icons used across the site
pub mod icons {
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const SUN: &str = "sun";
    pub const X: &str = "x";
}
