//! Page views. Each one is mounted by the platform router under the shell layout.

mod demo;
mod docs;
mod features;
mod home;
mod how_it_works;

pub use demo::Demo;
pub use docs::Docs;
pub use features::Features;
pub use home::Home;
pub use how_it_works::HowItWorks;

use dioxus::prelude::*;

use crate::components::app_navbar::nav_link;
use crate::navigation::NavRoute;

/// Reads the shell's language signal so the calling view re-renders after a
/// locale switch. Render the returned value in a hidden node.
pub(crate) fn use_lang_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

/// Gradient banner at the top of every page.
#[component]
pub(crate) fn PageHero(
    icon: &'static str,
    title: String,
    lead: String,
    children: Element,
) -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container page-hero__inner",
                h1 { class: "page-hero__title",
                    span { class: "page-hero__icon", aria_hidden: "true", "{icon}" }
                    "{title}"
                }
                p { class: "lead page-hero__lead", "{lead}" }
                {children}
            }
        }
    }
}

/// Closing call-to-action band with two route buttons.
#[component]
pub(crate) fn CtaBand(
    title: &'static str,
    lead: &'static str,
    primary: (NavRoute, &'static str),
    secondary: (NavRoute, &'static str),
) -> Element {
    let (primary_route, primary_label) = primary;
    let (secondary_route, secondary_label) = secondary;
    rsx! {
        section { class: "cta-band",
            div { class: "container cta-band__inner",
                h2 { class: "cta-band__title", "{title}" }
                p { class: "lead cta-band__lead", "{lead}" }
                div { class: "cta-band__actions",
                    {nav_link(primary_route, "button button--light button--large", primary_label)}
                    {nav_link(secondary_route, "button button--outline-light button--large", secondary_label)}
                }
            }
        }
    }
}

/// Section heading with a muted lead paragraph.
#[component]
pub(crate) fn SectionHeading(
    title: &'static str,
    lead: &'static str,
    #[props(default)] gradient: bool,
) -> Element {
    let class = if gradient {
        "section-heading__title gradient-text"
    } else {
        "section-heading__title"
    };
    rsx! {
        div { class: "section-heading",
            h2 { class: "{class}", "{title}" }
            p { class: "lead section-heading__lead", "{lead}" }
        }
    }
}
