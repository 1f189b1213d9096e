use dioxus::prelude::*;

use super::{use_lang_marker, CtaBand, PageHero, SectionHeading};
use crate::demo::DemoView;
use crate::navigation::NavRoute;
use crate::t;

/// (icon, title, body)
const IN_ACTION: &[(&str, &str, &str)] = &[
    (
        "🧠",
        "Intent Recognition",
        "Our NLP models automatically identify whether you want to SELECT, JOIN, FILTER, or AGGREGATE data from your queries.",
    ),
    (
        "🔍",
        "Entity Extraction",
        "Advanced NLP extracts entities like table names, column references, dates, and numbers from natural language.",
    ),
    (
        "🌐",
        "Context Understanding",
        "NLP models understand context and relationships between concepts to generate accurate, optimized SQL queries.",
    ),
];

#[component]
pub fn Demo() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }

        PageHero {
            icon: "▶",
            title: t!("demo-page-title"),
            lead: t!("demo-page-lead"),
        }

        section { class: "section",
            div { class: "container container--narrow",
                DemoView {}
            }
        }

        section { class: "section section--muted",
            div { class: "container",
                SectionHeading {
                    title: "NLP-Powered Features in Action",
                    lead: "See how our Natural Language Processing capabilities work behind the scenes.",
                    gradient: true,
                }
                div { class: "card-grid card-grid--three",
                    for (icon, title, body) in IN_ACTION.iter().copied() {
                        div { key: "{title}", class: "feature-card feature-card--centered",
                            div { class: "feature-card__icon feature-card__icon--round", "{icon}" }
                            h5 { class: "feature-card__title", "{title}" }
                            p { class: "feature-card__body", "{body}" }
                        }
                    }
                }
            }
        }

        CtaBand {
            title: "Ready to Integrate NLP into Your Projects?",
            lead: "Get started with NL2SQL and bring the power of Natural Language Processing to your database queries.",
            primary: (NavRoute::Docs, "Read the Docs"),
            secondary: (NavRoute::HowItWorks, "See How It Works"),
        }
    }
}
