use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::app_navbar::nav_link;
use crate::content::{FooterLink, LinkGroup, FOOTER_GROUPS, FOOTER_NLP_FEATURES};
use crate::t;

fn group_title(group: &LinkGroup) -> String {
    match group.title {
        "Product" => t!("footer-heading-product"),
        "Resources" => t!("footer-heading-resources"),
        "Company" => t!("footer-heading-company"),
        other => other.to_string(),
    }
}

fn render_link(link: &FooterLink) -> Element {
    match link {
        FooterLink::Internal { label, route } => nav_link(*route, "footer__link", label),
        FooterLink::External { label, href } => rsx! {
            a { class: "footer__link", href: *href, "{label}" }
        },
    }
}

#[component]
pub fn Footer() -> Element {
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    div { class: "footer__brand-row",
                        span { class: "footer__brand-icon", aria_hidden: "true", "🗄" }
                        div {
                            span { class: "footer__brand-name", "NL2SQL" }
                            div { class: "footer__brand-tagline", {t!("tagline")} }
                        }
                    }
                    p { class: "footer__blurb", {t!("footer-blurb")} }
                }

                for (group_idx, group) in FOOTER_GROUPS.iter().enumerate() {
                    div { key: "{group_idx}", class: "footer__column",
                        h6 { class: "footer__heading", {group_title(group)} }
                        ul { class: "footer__list",
                            for (idx, link) in group.links.iter().enumerate() {
                                li { key: "{idx}", class: "footer__item", {render_link(link)} }
                            }
                        }
                    }
                }

                div { class: "footer__column",
                    h6 { class: "footer__heading", {t!("footer-heading-nlp")} }
                    ul { class: "footer__list",
                        for (icon, label) in FOOTER_NLP_FEATURES.iter().copied() {
                            li { key: "{label}", class: "footer__item footer__item--static",
                                span { class: "footer__icon", aria_hidden: "true", "{icon}" }
                                "{label}"
                            }
                        }
                    }
                }
            }

            hr { class: "footer__rule" }

            p { class: "footer__legal",
                "© {year} "
                span { class: "footer__brand-name footer__brand-name--inline", "NL2SQL" }
                ". "
                {t!("footer-rights")}
                span { class: "footer__credit", {t!("footer-powered-by")} }
            }
        }
    }
}
