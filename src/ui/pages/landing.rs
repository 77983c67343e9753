//! Landing page component
//!
//! Static marketing page for Pixelforge featuring:
//! - SEO meta tags and JSON-LD structured data
//! - Header with in-page navigation, theme toggle and auth entry points
//! - Slide-in mobile navigation drawer
//! - Hero section over a pointer-driven parallax grid
//! - Feature highlights, pricing tiers and a closing call-to-action
//! - Footer
//!
//! Opening the auth dialog and switching themes are delegated to the parent
//! through callbacks; the page itself only owns the drawer state.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    CtaAction, FEATURES, FOOTER_COLUMNS, NAV_LINKS, PRICING_TIERS, PRODUCT_NAME, PricingTier,
    REPOSITORY_URL, SITE_URL, TAGLINE, structured_data,
};
use crate::core::parallax::{GRID_COLS, hero_grid};
use crate::core::{AuthView, Theme};
use crate::ui::effects::{use_pointer_parallax, use_scroll_reveal};
use crate::ui::icon::{Icon, icons};

/// Sections handed to the scroll reveal effect.
const REVEAL_SECTIONS: usize = 5;

/// Click handlers shared by every control on the page.
#[derive(Clone, Copy)]
pub struct LandingHandlers {
    on_open_auth_modal: Callback<AuthView>,
    on_toggle_theme: Callback<()>,
    mobile_menu_open: RwSignal<bool>,
}

impl LandingHandlers {
    pub fn new(on_open_auth_modal: Callback<AuthView>, on_toggle_theme: Callback<()>) -> Self {
        Self {
            on_open_auth_modal,
            on_toggle_theme,
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn register(&self) {
        self.on_open_auth_modal.run(AuthView::Register);
    }

    pub fn log_in(&self) {
        self.on_open_auth_modal.run(AuthView::Login);
    }

    pub fn toggle_theme(&self) {
        self.on_toggle_theme.run(());
    }

    pub fn close_menu(&self) {
        self.mobile_menu_open.set(false);
    }

    pub fn toggle_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn menu_open(&self) -> Signal<bool> {
        self.mobile_menu_open.into()
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open.get_untracked()
    }
}

/// Icon shown on the theme toggle: the theme a click switches to.
pub fn theme_icon(theme: Theme) -> &'static str {
    if theme.is_dark() { icons::SUN } else { icons::MOON }
}

/// Landing page component
#[component]
pub fn LandingPage(
    /// Opens the auth dialog on the requested view
    on_open_auth_modal: Callback<AuthView>,
    /// Current theme, read-only
    #[prop(into)]
    theme: Signal<Theme>,
    /// Asks the parent to switch themes
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let handlers = LandingHandlers::new(on_open_auth_modal, on_toggle_theme);

    let reveal: [NodeRef<html::Div>; REVEAL_SECTIONS] = std::array::from_fn(|_| NodeRef::new());
    use_scroll_reveal(reveal.to_vec());

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header handlers=handlers theme=theme />
            <MobileMenu handlers=handlers theme=theme />

            <Hero handlers=handlers />

            <FeatureSection heading_ref=reveal[0] grid_ref=reveal[1] />

            <PricingSection handlers=handlers heading_ref=reveal[2] grid_ref=reveal[3] />

            <CtaSection handlers=handlers reveal_ref=reveal[4] />

            <Footer />

            <LandingStyles />
        </div>
    }
}

/// Header with desktop navigation and the drawer trigger
#[component]
fn Header(handlers: LandingHandlers, theme: Signal<Theme>) -> impl IntoView {
    let open = handlers.menu_open();

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#top" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">{PRODUCT_NAME}</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            {NAV_LINKS.iter().map(|link| view! {
                                <a href=link.href class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                    {link.label}
                                </a>
                            }).collect_view()}
                        </nav>
                        <ThemeToggle handlers=handlers theme=theme />
                        <button
                            class="text-sm font-medium text-theme-primary hover:text-accent-primary transition-colors"
                            on:click=move |_| handlers.log_in()
                        >
                            "Log In"
                        </button>
                        <button
                            class="px-4 py-2 text-sm font-semibold text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                            on:click=move |_| handlers.register()
                        >
                            "Sign Up"
                        </button>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| handlers.toggle_menu()
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || if open.get() { "true" } else { "false" }
                    >
                        <Icon name=icons::MENU class="w-6 h-6" />
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Slide-in navigation drawer for small screens
#[component]
fn MobileMenu(handlers: LandingHandlers, theme: Signal<Theme>) -> impl IntoView {
    let open = handlers.menu_open();

    view! {
        // Backdrop
        <div
            class="md:hidden fixed inset-0 z-40 bg-black/40 transition-opacity duration-300"
            class:opacity-0=move || !open.get()
            class:pointer-events-none=move || !open.get()
            on:click=move |_| handlers.close_menu()
            aria-hidden="true"
        ></div>

        <aside
            id="mobile-menu"
            class="md:hidden fixed top-0 right-0 bottom-0 z-50 w-72 max-w-[80vw] bg-theme-primary border-l border-theme
                   shadow-xl landing-drawer"
            class:landing-drawer-open=move || open.get()
            aria-hidden=move || if open.get() { "false" } else { "true" }
        >
            <div class="flex items-center justify-between h-16 px-4 border-b border-theme/50">
                <span class="text-lg font-bold text-theme-primary">{PRODUCT_NAME}</span>
                <button
                    class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                    on:click=move |_| handlers.close_menu()
                    aria-label="Close menu"
                >
                    <Icon name=icons::X class="w-6 h-6" />
                </button>
            </div>

            <nav class="flex flex-col gap-2 p-4">
                {NAV_LINKS.iter().map(|link| view! {
                    <a
                        href=link.href
                        class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                        on:click=move |_| handlers.close_menu()
                    >
                        {link.label}
                    </a>
                }).collect_view()}

                <div class="flex flex-col gap-2 pt-4 mt-2 border-t border-theme/50">
                    <button
                        class="w-full px-4 py-2 text-sm font-medium text-theme-primary border border-theme rounded-lg"
                        on:click=move |_| {
                            handlers.close_menu();
                            handlers.log_in();
                        }
                    >
                        "Log In"
                    </button>
                    <button
                        class="w-full px-4 py-2 text-sm font-semibold text-white bg-accent-primary rounded-lg"
                        on:click=move |_| {
                            handlers.close_menu();
                            handlers.register();
                        }
                    >
                        "Sign Up"
                    </button>
                </div>

                <div class="flex items-center justify-between px-4 pt-4">
                    <span class="text-sm text-theme-secondary">"Theme"</span>
                    <ThemeToggle handlers=handlers theme=theme />
                </div>
            </nav>
        </aside>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(handlers: LandingHandlers, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| handlers.toggle_theme()
            aria-label="Toggle theme"
        >
            {move || view! { <Icon name=theme_icon(theme.get()) class="w-5 h-5" /> }}
        </button>
    }
}

/// Hero section
#[component]
fn Hero(handlers: LandingHandlers) -> impl IntoView {
    view! {
        <section id="top" class="min-h-screen flex items-center justify-center relative pt-16 overflow-hidden">
            <ParallaxGrid />

            <div class="relative text-center px-4 max-w-4xl mx-auto">
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight landing-fade-in-up">
                    "Create without limits"
                </h1>
                <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                    {TAGLINE}
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                    <button
                        class="landing-btn-primary"
                        on:click=move |_| handlers.register()
                    >
                        "Get Started Free"
                    </button>
                    <a href="#pricing" class="landing-btn-secondary">
                        "See Pricing"
                    </a>
                </div>

                // Scroll indicator
                <div class="mt-16 flex justify-center animate-bounce" aria-hidden="true">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-theme-tertiary" />
                </div>
            </div>
        </section>
    }
}

/// Decorative grid behind the hero; cells drift with the pointer
#[component]
fn ParallaxGrid() -> impl IntoView {
    let cells: Vec<_> = hero_grid()
        .into_iter()
        .map(|cell| (NodeRef::<html::Div>::new(), cell))
        .collect();
    let rendered = cells.clone();
    use_pointer_parallax(cells);

    view! {
        <div
            class="absolute inset-0 -z-10 grid gap-6 p-10 opacity-60"
            style=format!("grid-template-columns: repeat({GRID_COLS}, minmax(0, 1fr));")
            aria-hidden="true"
        >
            {rendered.into_iter().map(|(node_ref, cell)| view! {
                <div
                    node_ref=node_ref
                    class="landing-grid-cell"
                    style=format!("opacity: {:.2};", 0.25 + cell.depth * 0.5)
                ></div>
            }).collect_view()}
        </div>
    }
}

/// Feature highlights
#[component]
fn FeatureSection(heading_ref: NodeRef<html::Div>, grid_ref: NodeRef<html::Div>) -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div node_ref=heading_ref class="text-center mb-16 landing-reveal">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Everything you need to create"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Professional tools that open in a tab. No installs, no plugins."
                    </p>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-3 gap-8 landing-reveal">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
                            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                                <Icon name=feature.icon class="w-6 h-6" />
                            </div>
                            <h3 class="text-lg font-semibold text-theme-primary mb-2">{feature.title}</h3>
                            <p class="text-theme-secondary text-sm leading-relaxed">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Pricing section component
#[component]
fn PricingSection(
    handlers: LandingHandlers,
    heading_ref: NodeRef<html::Div>,
    grid_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div node_ref=heading_ref class="text-center mb-16 landing-reveal">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Simple, Transparent Pricing"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Start for free. Upgrade when your projects grow."
                    </p>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto landing-reveal">
                    {PRICING_TIERS.iter().map(|tier| view! {
                        <PricingCard tier=*tier handlers=handlers />
                    }).collect_view()}
                </div>

                <p class="text-center text-theme-tertiary text-sm mt-8">
                    "Paid plans include a 14-day free trial. Cancel anytime."
                </p>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(tier: PricingTier, handlers: LandingHandlers) -> impl IntoView {
    let card_class = if tier.highlighted {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl md:scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };
    let cta_class = if tier.highlighted {
        "block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
    } else {
        "block w-full text-center py-3 px-6 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
    };

    view! {
        <div class=card_class>
            {tier.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{tier.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">{tier.price_label()}</span>
                    <span class="text-theme-secondary">{tier.period}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{tier.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {tier.features.iter().map(|&(feature, included)| view! {
                    <li class="flex items-center gap-3">
                        <Icon
                            name=if included { icons::CHECK } else { icons::X }
                            class=if included { "w-5 h-5 flex-shrink-0" } else { "w-5 h-5 flex-shrink-0 opacity-40" }
                        />
                        <span class=if included { "text-theme-primary" } else { "text-theme-tertiary line-through" }>
                            {feature}
                        </span>
                    </li>
                }).collect_view()}
            </ul>

            {match tier.cta {
                CtaAction::Register => view! {
                    <button class=cta_class on:click=move |_| handlers.register()>
                        {tier.cta_text}
                    </button>
                }.into_any(),
                CtaAction::Link(href) => view! {
                    <a href=href class=cta_class>
                        {tier.cta_text}
                    </a>
                }.into_any(),
            }}
        </div>
    }
}

/// Closing call-to-action
#[component]
fn CtaSection(handlers: LandingHandlers, reveal_ref: NodeRef<html::Div>) -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-gradient-to-b from-transparent to-theme-secondary/30">
            <div node_ref=reveal_ref class="max-w-4xl mx-auto text-center landing-reveal">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                    "Your next project starts here"
                </h2>
                <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">
                    "Join creators who edit, design and publish from a single browser tab."
                </p>
                <button
                    class="landing-btn-primary"
                    on:click=move |_| handlers.register()
                >
                    "Sign Up & Start Creating"
                </button>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">{PRODUCT_NAME}</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">{TAGLINE}</p>
                    </div>

                    {FOOTER_COLUMNS.iter().map(|column| view! {
                        <div>
                            <h4 class="font-semibold text-theme-primary mb-4">{column.title}</h4>
                            <ul class="space-y-2">
                                {column.links.iter().map(|link| view! {
                                    <li>
                                        <a
                                            href=link.href
                                            target=link.external.then_some("_blank")
                                            rel=link.external.then_some("noopener noreferrer")
                                            class="text-sm text-theme-secondary hover:text-accent-primary transition-colors"
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2025 Pixelforge. Built with Rust & Leptos."
                    </span>
                    <a href=REPOSITORY_URL target="_blank" rel="noopener noreferrer"
                       class="text-sm text-theme-tertiary hover:text-theme-primary transition-colors">
                        "Source on GitHub"
                    </a>
                </div>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    const TITLE: &str = "Pixelforge - Photo, Design & Video Editor in Your Browser";

    view! {
        <Title text=TITLE />
        <Meta name="description" content=TAGLINE />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=TITLE />
        <Meta property="og:description" content=TAGLINE />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=TITLE />

        <Link rel="canonical" href=SITE_URL />

        <script type="application/ld+json" inner_html=structured_data().to_string()></script>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-fuchsia-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M4 16l4.6-4.6a2 2 0 012.8 0L16 16m-2-2l1.6-1.6a2 2 0 012.8 0L20 14M14 8h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z" />
            </svg>
        </div>
    }
}

/// CSS for buttons, the drawer, the parallax grid and reveal transitions
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .landing-btn-primary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #7c3aed;
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover {
                transform: scale(1.05);
                background-color: #6d28d9;
            }

            .landing-btn-secondary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                border: 2px solid #9ca3af;
                border-radius: 0.75rem;
                transition: all 0.3s;
                background-color: #f9fafb;
                color: #374151;
            }
            .dark .landing-btn-secondary {
                background-color: #1f2937;
                border-color: #6b7280;
                color: #e5e7eb;
            }
            .landing-btn-secondary:hover {
                transform: scale(1.05);
            }

            /* Parallax grid */
            .landing-grid-cell {
                aspect-ratio: 1 / 1;
                border-radius: 1rem;
                border: 1px solid rgba(124, 58, 237, 0.25);
                background: linear-gradient(135deg, rgba(124, 58, 237, 0.08), rgba(192, 38, 211, 0.04));
                transition: transform 0.2s ease-out;
                will-change: transform;
            }

            /* Mobile drawer */
            .landing-drawer {
                transform: translateX(100%);
                transition: transform 0.3s ease-out;
            }
            .landing-drawer.landing-drawer-open {
                transform: translateX(0);
            }

            /* Hero entrance */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }
            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }
            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll reveal */
            .landing-reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-grid-cell, .landing-drawer, .landing-reveal { transition: none; }
                .landing-reveal { opacity: 1; transform: none; }
            }
            "#
        </style>
    }
}
