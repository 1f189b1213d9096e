use crate::core::config::use_site_config;
use crate::i18n::{self, nav_label};
use crate::navigation::{NavRoute, ScrollState};
use crate::t;
use crate::theme::ThemePreference;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Installs `window.__nl2sqlNavbarScroll` and reports `scrollY` on every scroll.
const SCROLL_LISTENER_JS: &str = r#"
window.__nl2sqlNavbarScroll = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.__nl2sqlNavbarScroll, { passive: true });
dioxus.send(window.scrollY);
"#;

const SCROLL_LISTENER_REMOVE_JS: &str = r#"
if (window.__nl2sqlNavbarScroll) {
    window.removeEventListener('scroll', window.__nl2sqlNavbarScroll);
    delete window.__nl2sqlNavbarScroll;
}
"#;

/// Platform hook for building router links.
///
/// `ui` does not know the platform's `Route` enum, so the web and desktop
/// crates register a function that maps a [`NavRoute`] onto their own
/// `Link { to: Route::... }`. The label passed in is already localized and
/// must become the link's only child.
///
/// ```ignore
/// fn route_link(route: NavRoute, class: &str, label: &str) -> Element {
///     let to = match route {
///         NavRoute::Home => Route::Home {},
///         NavRoute::Demo => Route::Demo {},
///         // ...
///     };
///     rsx!(Link { class: "{class}", to, "{label}" })
/// }
///
/// register_nav(NavBuilder { link: route_link });
/// ```
pub struct NavBuilder {
    pub link: fn(route: NavRoute, class: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Router link when a [`NavBuilder`] is registered, plain anchor otherwise.
pub fn nav_link(route: NavRoute, class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(route, class, label),
        None => rsx! {
            a { class: "{class}", href: route.path(), "{label}" }
        },
    }
}

/// Locale the switcher shows: the shell's current language, else the fallback.
fn selected_language(shell: Option<String>) -> String {
    shell
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string())
}

/// Fixed site navbar: brand, page links with the current one highlighted,
/// theme toggle, Try Demo call-to-action and the locale switcher.
///
/// Picks up a compact style once the window is scrolled past the configured
/// threshold; the listener is removed when the navbar unmounts.
#[component]
pub fn AppNavbar(current_path: String, theme: Signal<ThemePreference>) -> Element {
    i18n::init();

    let threshold = use_site_config().scroll_threshold_px;
    let mut scroll = use_signal(|| ScrollState::new(threshold));

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(offset) = listener.recv::<f64>().await {
            let mut next = *scroll.peek();
            if next.observe(offset) {
                debug!(offset, scrolled = next.scrolled(), "navbar scroll style changed");
                scroll.set(next);
            }
        }
    });

    // Resolved at mount: context lookups are not reliable while the scope is
    // being torn down. The removal script runs once sent, so its eval handle
    // is not kept.
    let renderer = use_hook(document::document);
    use_drop(move || {
        let _ = renderer.eval(SCROLL_LISTENER_REMOVE_JS.to_string());
    });

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // The shell may remount the navbar on a locale switch; start from its choice.
    let mut current_lang =
        use_signal(|| selected_language(lang_code_ctx.map(|code| code.peek().clone())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Subscribes this component to the shell's language signal.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let mut theme = theme;
    let preference = theme();
    let toggle_icon = preference.toggle_icon();
    let toggle_title = if preference.is_dark() {
        t!("theme-to-light")
    } else {
        t!("theme-to-dark")
    };

    let header_class = if scroll().scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };

    let links = NavRoute::ALL.into_iter().map(|route| {
        let class = if route.is_active(&current_path) {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        };
        let link = nav_link(route, class, &nav_label(route));
        let path = route.path();
        rsx! {
            li { key: "{path}", {link} }
        }
    });

    rsx! {
        document::Style { "{NAVBAR_CSS_INLINE}" }

        header { id: "navbar", class: "{header_class}",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavRoute::Home, "navbar__brand-link", "NL2SQL")}
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__nav",
                    ul { class: "navbar__links", {links} }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__theme-toggle",
                        title: "{toggle_title}",
                        aria_label: "{toggle_title}",
                        onclick: move |_| {
                            let next = theme.peek().toggled();
                            theme.set(next);
                        },
                        "{toggle_icon}"
                    }

                    {nav_link(NavRoute::Demo, "button button--primary navbar__cta", &t!("nav-try-demo"))}

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;

    thread_local! {
        static SHOW_NAVBAR: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
    }

    #[component]
    fn Shell() -> Element {
        let theme = crate::theme::provide_theme();
        let show = use_signal(|| true);
        SHOW_NAVBAR.with(|slot| *slot.borrow_mut() = Some(show));
        rsx! {
            if show() {
                AppNavbar { current_path: "/demo".to_string(), theme }
            }
        }
    }

    #[test]
    fn navbar_unmounts_cleanly_without_a_renderer() {
        let mut dom = VirtualDom::new(Shell);
        dom.rebuild_in_place();

        let mut show = SHOW_NAVBAR.with(|slot| *slot.borrow()).expect("shell rendered");
        dom.in_runtime(|| show.set(false));
        // Runs the listener-removal drop hook against the Document captured at mount.
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn switcher_follows_the_shell_language() {
        assert_eq!(selected_language(Some("es-ES".to_string())), "es-ES");
    }

    #[test]
    fn switcher_falls_back_without_a_shell_language() {
        assert_eq!(selected_language(None), i18n::FALLBACK_LANGUAGE);
        assert_eq!(selected_language(Some(String::new())), i18n::FALLBACK_LANGUAGE);
    }
}
