use dioxus::prelude::*;

use super::{use_lang_marker, CtaBand, PageHero, SectionHeading};
use crate::content::{PERFORMANCE_METRICS, PIPELINE_STEPS, SPEED_BREAKDOWN, TECH_STACK};
use crate::core::config::use_site_config;
use crate::core::timing::every_ms;
use crate::motion::StepCycle;
use crate::navigation::NavRoute;
use crate::t;

#[component]
pub fn HowItWorks() -> Element {
    let lang_marker = use_lang_marker();
    let interval_ms = use_site_config().step_interval_ms;

    let mut cycle = use_signal(|| StepCycle::new(PIPELINE_STEPS.len()));

    // Display-only highlight; the task dies with the view.
    use_future(move || async move {
        every_ms(interval_ms, move || cycle.write().advance()).await;
    });

    let active = *cycle.read();

    rsx! {
        div { style: "display:none", "{lang_marker}" }

        PageHero {
            icon: "⚙",
            title: t!("how-title"),
            lead: t!("how-lead"),
        }

        section { class: "section",
            div { class: "container",
                SectionHeading {
                    title: "NLP Processing Pipeline",
                    lead: "Our advanced Natural Language Processing system uses multiple AI models working together to understand and process your queries.",
                    gradient: true,
                }

                div { class: "process-list",
                    for (idx, step) in PIPELINE_STEPS.iter().enumerate() {
                        article {
                            key: "{step.number}",
                            class: if active.is_active(idx) { "process-step process-step--active" } else { "process-step" },
                            div { class: "process-step__icon", "{step.icon}" }
                            div { class: "process-step__content",
                                div { class: "process-step__header",
                                    h4 { class: "process-step__title", "{step.title}" }
                                    span { class: "badge badge--muted", "Step {step.number}" }
                                }
                                p { class: "process-step__description", "{step.description}" }
                                div { class: "process-step__columns",
                                    div {
                                        h6 { "NLP Techniques:" }
                                        ul { class: "check-list",
                                            for detail in step.details.iter() {
                                                li { key: "{detail}", class: "check-list__item", "{detail}" }
                                            }
                                        }
                                    }
                                    div { class: "example-box",
                                        h6 { "Example:" }
                                        small { "Input:" }
                                        code { class: "example-box__code", "{step.example_input}" }
                                        small { "Output:" }
                                        code { class: "example-box__code", "{step.example_output}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "flow",
                    h3 { class: "flow__title", "Complete NLP Flow Visualization" }
                    div { class: "flow__track",
                        for (idx, step) in PIPELINE_STEPS.iter().enumerate() {
                            div { key: "{step.number}", class: "flow__node",
                                div {
                                    class: if active.is_active(idx) { "flow__bubble flow__bubble--active" } else { "flow__bubble" },
                                    "{step.icon}"
                                }
                                h6 { class: "flow__label", "{step.title}" }
                                if idx + 1 < PIPELINE_STEPS.len() {
                                    span { class: "flow__arrow", aria_hidden: "true", "→" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section section--muted",
            div { class: "container",
                SectionHeading {
                    title: "NLP Technology Stack",
                    lead: "Built on the latest Natural Language Processing technologies and frameworks.",
                    gradient: true,
                }
                div { class: "card-grid card-grid--four",
                    for column in TECH_STACK.iter() {
                        div { key: "{column.title}", class: "stack-column",
                            div { class: "stack-column__icon", "{column.icon}" }
                            h5 { class: "stack-column__title", "{column.title}" }
                            ul { class: "stack-column__items",
                                for item in column.items.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container split",
                div {
                    SectionHeading {
                        title: "NLP Performance Metrics",
                        lead: "Our Natural Language Processing system delivers exceptional performance with industry-leading accuracy and speed.",
                    }
                    div { class: "metric-grid",
                        for (value, label) in PERFORMANCE_METRICS.iter().copied() {
                            div { key: "{label}", class: "metric",
                                div { class: "metric__value", "{value}" }
                                div { class: "metric__label", "{label}" }
                            }
                        }
                    }
                }
                div { class: "glass speed-card",
                    h5 { class: "speed-card__title", "NLP Processing Speed" }
                    for (stage, time) in SPEED_BREAKDOWN.iter().copied() {
                        div { key: "{stage}", class: "speed-card__row",
                            span { "{stage}" }
                            span { class: "badge badge--success", "{time}" }
                        }
                    }
                    hr {}
                    div { class: "speed-card__row speed-card__row--total",
                        span { "Total Processing Time" }
                        span { class: "badge badge--dark", "< 5ms" }
                    }
                }
            }
        }

        CtaBand {
            title: "Ready to Experience Advanced NLP?",
            lead: "See how our sophisticated Natural Language Processing transforms your database interactions into seamless conversations.",
            primary: (NavRoute::Demo, "Try the Demo"),
            secondary: (NavRoute::Features, "Explore Features"),
        }
    }
}
