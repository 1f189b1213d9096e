use dioxus::prelude::*;

use super::{use_lang_marker, CtaBand, SectionHeading};
use crate::components::app_navbar::nav_link;
use crate::content::{home_queries, HOME_HIGHLIGHTS, HOME_PREVIEW_SQL, HOME_STATS, HOME_STEPS};
use crate::core::config::use_site_config;
use crate::core::timing::sleep_ms;
use crate::motion::Typewriter;
use crate::navigation::NavRoute;

#[component]
pub fn Home() -> Element {
    let lang_marker = use_lang_marker();
    let config = use_site_config();

    let mut typewriter = use_signal(|| {
        Typewriter::new(
            home_queries(),
            config.typewriter_tick_ms,
            config.typewriter_pause_ms,
        )
    });

    // Owned by this view: leaving Home drops the loop and its pending sleep.
    use_future(move || async move {
        let mut wait = typewriter.peek().initial_delay_ms();
        loop {
            sleep_ms(wait).await;
            wait = typewriter.write().step();
        }
    });

    let typed = typewriter.read().visible_text();

    rsx! {
        div { style: "display:none", "{lang_marker}" }

        section { class: "home-hero",
            div { class: "container home-hero__grid",
                div { class: "home-hero__copy",
                    span { class: "pill", "🧠 Advanced NLP Technology" }
                    h1 { class: "home-hero__title",
                        "Ask in "
                        span { class: "text-highlight", "English" }
                        "."
                        br {}
                        "Get "
                        span { class: "text-highlight", "SQL" }
                        " Instantly."
                    }
                    p { class: "lead",
                        "NL2SQL leverages cutting-edge "
                        strong { "Natural Language Processing" }
                        " and "
                        strong { "Large Language Models" }
                        " to understand your questions and transform them into precise SQL queries with unprecedented accuracy."
                    }
                    div { class: "home-hero__actions",
                        {nav_link(NavRoute::Demo, "button button--light button--large", "▶ Try NLP Demo")}
                        {nav_link(NavRoute::HowItWorks, "button button--outline-light button--large", "⚙ See How NLP Works")}
                    }
                    div { class: "stat-row",
                        for stat in HOME_STATS.iter() {
                            div { key: "{stat.label}", class: "stat",
                                div { class: "stat__value", "{stat.value}" }
                                div { class: "stat__label", "{stat.label}" }
                            }
                        }
                    }
                }

                div { class: "home-hero__preview glass",
                    h5 { class: "home-hero__preview-title", "💬 Natural Language Input" }
                    div { class: "terminal",
                        div { class: "terminal__label terminal__label--input", "User Query:" }
                        div { class: "terminal__body terminal__body--input",
                            code { class: "typewriter",
                                "{typed}"
                                span { class: "blinking-cursor", "|" }
                            }
                        }
                    }
                    div { class: "home-hero__arrow", aria_hidden: "true", "↓" }
                    div { class: "terminal",
                        div { class: "terminal__label terminal__label--output", "Generated SQL:" }
                        div { class: "terminal__body terminal__body--output",
                            pre { code { "{HOME_PREVIEW_SQL}" } }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Powered by Advanced NLP",
                    lead: "Our platform uses state-of-the-art Natural Language Processing techniques to understand context, intent, and complex queries.",
                    gradient: true,
                }
                div { class: "card-grid card-grid--three",
                    for highlight in HOME_HIGHLIGHTS.iter() {
                        div { key: "{highlight.title}", class: "feature-card",
                            div { class: "feature-card__icon", "{highlight.icon}" }
                            h4 { class: "feature-card__title", "{highlight.title}" }
                            p { class: "feature-card__body", "{highlight.body}" }
                        }
                    }
                }
            }
        }

        section { class: "section section--muted",
            div { class: "container split",
                div {
                    h2 { class: "section-heading__title", "From Natural Language to SQL in 4 Steps" }
                    ol { class: "numbered-steps",
                        for (idx, (title, body)) in HOME_STEPS.iter().copied().enumerate() {
                            li { key: "{idx}", class: "numbered-steps__item",
                                span { class: "numbered-steps__badge", {(idx + 1).to_string()} }
                                div {
                                    h5 { class: "numbered-steps__title", "{title}" }
                                    p { class: "numbered-steps__body", "{body}" }
                                }
                            }
                        }
                    }
                    {nav_link(NavRoute::HowItWorks, "button button--primary", "Learn More About NLP Process")}
                }
                div { class: "split__visual float", aria_hidden: "true", "🧠 → 🗄" }
            }
        }

        CtaBand {
            title: "Ready to Experience NLP-Powered SQL?",
            lead: "Join thousands of developers and data analysts who are already using NL2SQL to query their databases with natural language.",
            primary: (NavRoute::Demo, "Start NLP Demo"),
            secondary: (NavRoute::Docs, "View Documentation"),
        }
    }
}
