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
    #[layout(WebShell)]
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

// Shared theme lives in the ui crate; inlined so the web bundle needs no asset pipeline.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn route_link(route: NavRoute, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::from(route),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_context_provider(SiteConfig::embedded);

    // AppNavbar writes the selected locale here; views read it to re-render.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);
    provide_theme();

    register_nav(NavBuilder { link: route_link });

    rsx! {
        document::Title { "NL2SQL" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: navbar, routed page and footer under a root that carries the
/// theme class.
#[component]
fn WebShell() -> Element {
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
