#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Footer};
use ui::core::config::SiteConfig;
use ui::navigation::NavRoute;
use ui::views::{Demo, Docs, Features, Home, HowItWorks};
use ui::theme::{provide_theme, use_theme};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/features")]
    Features {},
    #[route("/how-it-works")]
    HowItWorks {},
    #[route("/demo")]
    Demo {},
    #[route("/docs")]
    Docs {},
}

impl From<NavRoute> for Route {
    fn from(route: NavRoute) -> Self {
        match route {
            NavRoute::Home => Route::Home {},
            NavRoute::Features => Route::Features {},
            NavRoute::HowItWorks => Route::HowItWorks {},
            NavRoute::Demo => Route::Demo {},
            NavRoute::Docs => Route::Docs {},
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; the desktop build ships no separate stylesheet.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("NL2SQL – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn route_link(route: NavRoute, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::from(route), "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_context_provider(SiteConfig::embedded);

    // AppNavbar updates this on locale selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);
    // Above the language-keyed router so a locale switch keeps the theme.
    provide_theme();

    register_nav(NavBuilder { link: route_link });

    // Runtime maximize fallback for window managers that ignore the builder flag
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts with the new bundle
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout around the shared navbar and footer, tied to the
/// desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let theme = use_theme();
    let current_path = use_route::<Route>().to_string();
    let root_class = theme().root_class();

    rsx! {
        div { class: "{root_class}",
            AppNavbar { current_path, theme }
            main { class: "page", Outlet::<Route> {} }
            Footer {}
        }
    }
}
