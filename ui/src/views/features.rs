use dioxus::prelude::*;

use super::{use_lang_marker, CtaBand, PageHero, SectionHeading};
use crate::content::{FEATURES, FEATURE_PIPELINE, HERO_EXAMPLES, TECH_SPECS, USE_CASES};
use crate::navigation::NavRoute;
use crate::t;

#[component]
pub fn Features() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }

        PageHero {
            icon: "🧠",
            title: t!("features-title"),
            lead: t!("features-lead"),
            div { class: "glass hero-examples",
                h5 { class: "hero-examples__title", "Try These NLP Examples:" }
                div { class: "hero-examples__grid",
                    for example in HERO_EXAMPLES.iter().copied() {
                        code { key: "{example}", class: "hero-examples__item", "\"{example}\"" }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Advanced NLP Capabilities",
                    lead: "Our platform leverages cutting-edge Natural Language Processing to understand and process complex human queries with unprecedented accuracy.",
                    gradient: true,
                }
                div { class: "card-grid card-grid--three",
                    for feature in FEATURES.iter() {
                        article { key: "{feature.title}", class: "feature-card feature-card--detailed",
                            div { class: "feature-card__icon", "{feature.icon}" }
                            h4 { class: "feature-card__title", "{feature.title}" }
                            p { class: "feature-card__body", "{feature.description}" }
                            ul { class: "check-list",
                                for detail in feature.details.iter() {
                                    li { key: "{detail}", class: "check-list__item", "{detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section section--muted",
            div { class: "container split",
                div {
                    SectionHeading {
                        title: "NLP Technical Specifications",
                        lead: "Built with enterprise-grade Natural Language Processing infrastructure to handle complex queries at scale with high accuracy and speed.",
                    }
                    dl { class: "spec-list",
                        for spec in TECH_SPECS.iter() {
                            div { key: "{spec.label}", class: "spec-list__row",
                                dt { class: "spec-list__label", "{spec.label}" }
                                dd { class: "spec-list__value", "{spec.value}" }
                            }
                        }
                    }
                }
                div { class: "pipeline-card",
                    h5 { class: "pipeline-card__title", "NLP Processing Pipeline" }
                    ol { class: "pipeline-card__steps",
                        for (idx, stage) in FEATURE_PIPELINE.iter().copied().enumerate() {
                            li { key: "{idx}", class: "pipeline-card__step",
                                span { class: "numbered-steps__badge numbered-steps__badge--small", {(idx + 1).to_string()} }
                                span { "{stage}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHeading {
                    title: "NLP Use Cases & Applications",
                    lead: "See how Natural Language Processing transforms different industries and use cases with intelligent query understanding.",
                    gradient: true,
                }
                div { class: "card-grid card-grid--three",
                    for case in USE_CASES.iter() {
                        div { key: "{case.title}", class: "use-case",
                            div { class: "use-case__icon", "{case.icon}" }
                            h5 { class: "use-case__title", "{case.title}" }
                            p { class: "use-case__body",
                                "\"{case.question}\" → {case.outcome}"
                            }
                        }
                    }
                }
            }
        }

        CtaBand {
            title: "Experience the Power of NLP",
            lead: "Ready to transform your database queries with Natural Language Processing? Try our interactive demo and see the magic in action.",
            primary: (NavRoute::Demo, "Try NLP Demo"),
            secondary: (NavRoute::Docs, "Read the Docs"),
        }
    }
}
