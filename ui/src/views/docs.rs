use api::{HealthReport, SchemaCatalog};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use time::OffsetDateTime;

use super::{use_lang_marker, PageHero};
use crate::content::{DocsSection, API_ENDPOINTS, FAQ, NLP_OPTIONS, VERIFY_SNIPPET};
use crate::navigation::{DocsTab, FaqAccordion};
use crate::t;

#[component]
fn CodeBlock(language: &'static str, code: &'static str) -> Element {
    rsx! {
        div { class: "code-block",
            span { class: "code-block__language", "{language}" }
            pre { code { class: "language-{language}", "{code}" } }
        }
    }
}

#[component]
fn NotesList(
    #[props(!optional)] title: Option<&'static str>,
    notes: &'static [&'static str],
) -> Element {
    rsx! {
        div { class: "alert alert--info",
            if let Some(title) = title {
                h6 { class: "alert__title", "{title}" }
            }
            ul { class: "alert__list",
                for note in notes.iter() {
                    li { key: "{note}", "{note}" }
                }
            }
        }
    }
}

/// Three-column reference table used for the NLP options and API endpoints.
#[component]
fn ReferenceTable(
    headers: [&'static str; 3],
    rows: &'static [(&'static str, &'static str, &'static str)],
) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        for header in headers {
                            th { key: "{header}", "{header}" }
                        }
                    }
                }
                tbody {
                    for (first, second, third) in rows.iter().copied() {
                        tr { key: "{first}",
                            td { code { "{first}" } }
                            td { "{second}" }
                            td { "{third}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SchemaTables() -> Element {
    let catalog = SchemaCatalog::sample();
    let summary = format!(
        "{} tables, {} columns",
        catalog.tables.len(),
        catalog.column_count()
    );

    rsx! {
        div { class: "schema-catalog",
            p { class: "schema-catalog__summary", "{summary}" }
            for table in catalog.tables.iter() {
                div { key: "{table.name}", class: "schema-catalog__table",
                    h5 { class: "schema-catalog__name", code { "{table.name}" } }
                    table { class: "data-table data-table--compact",
                        tbody {
                            for column in table.columns.iter() {
                                tr { key: "{column.name}",
                                    td { code { "{column.name}" } }
                                    td { class: "schema-catalog__type", "{column.sql_type}" }
                                    td { "{column.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HealthExample() -> Element {
    let body = use_hook(|| HealthReport::simulated(OffsetDateTime::now_utc()).to_pretty_json());
    rsx! {
        h4 { class: "docs-panel__subheading", "GET /v1/health" }
        pre { class: "code-block", code { class: "language-json", "{body}" } }
    }
}

#[component]
fn SectionPanel(tab: DocsTab) -> Element {
    let section = DocsSection::for_tab(tab);
    let notes_first = tab == DocsTab::Installation;

    rsx! {
        article { class: "docs-panel",
            h2 { class: "docs-panel__heading",
                span { class: "docs-panel__icon", aria_hidden: "true", "{section.icon}" }
                "{section.heading}"
            }
            p { class: "lead docs-panel__lead", "{section.lead}" }

            if notes_first {
                h4 { class: "docs-panel__subheading", "{section.notes_heading}" }
                NotesList { title: section.notes_title, notes: section.notes }
            }

            if let Some(code_heading) = section.code_heading {
                h4 { class: "docs-panel__subheading", "{code_heading}" }
            }
            CodeBlock { language: section.code_language, code: section.code }

            {match tab {
                DocsTab::Installation => rsx! {
                    h4 { class: "docs-panel__subheading", "Verify Installation" }
                    CodeBlock { language: "python", code: VERIFY_SNIPPET }
                },
                DocsTab::AdvancedNlp => rsx! {
                    h4 { class: "docs-panel__subheading", "{section.notes_heading}" }
                    ReferenceTable { headers: ["Option", "Description", "Default"], rows: NLP_OPTIONS }
                },
                DocsTab::ApiReference => rsx! {
                    h4 { class: "docs-panel__subheading", "{section.notes_heading}" }
                    ReferenceTable { headers: ["Endpoint", "Method", "Description"], rows: API_ENDPOINTS }
                    HealthExample {}
                },
                DocsTab::SchemaSetup => rsx! {
                    SchemaTables {}
                    h4 { class: "docs-panel__subheading", "{section.notes_heading}" }
                    NotesList { title: section.notes_title, notes: section.notes }
                },
                DocsTab::BasicUsage | DocsTab::Configuration => rsx! {
                    h4 { class: "docs-panel__subheading", "{section.notes_heading}" }
                    NotesList { title: section.notes_title, notes: section.notes }
                },
            }}
        }
    }
}

#[component]
pub fn Docs() -> Element {
    let lang_marker = use_lang_marker();
    let mut active_tab = use_signal(DocsTab::default);
    let mut faq = use_signal(FaqAccordion::default);

    let current = active_tab();
    let accordion = faq();

    rsx! {
        div { style: "display:none", "{lang_marker}" }

        PageHero {
            icon: "📖",
            title: t!("docs-title"),
            lead: t!("docs-lead"),
        }

        section { class: "section",
            div { class: "container docs-layout",
                nav { class: "docs-tabs", aria_label: t!("docs-quick-links"),
                    for tab in DocsTab::ALL {
                        button {
                            key: "{tab.key()}",
                            r#type: "button",
                            class: if tab == current { "docs-tabs__tab docs-tabs__tab--active" } else { "docs-tabs__tab" },
                            aria_pressed: tab == current,
                            onclick: move |_| {
                                debug!(tab = tab.key(), "docs tab selected");
                                active_tab.set(tab);
                            },
                            span { class: "docs-tabs__label", {DocsSection::for_tab(tab).label} }
                            span { class: "docs-tabs__hint",
                                span { aria_hidden: "true", {DocsSection::for_tab(tab).icon} }
                                " "
                                {DocsSection::for_tab(tab).hint}
                            }
                        }
                    }
                }

                SectionPanel { key: "{current.key()}", tab: current }
            }
        }

        section { class: "section section--muted",
            div { class: "container container--narrow",
                h2 { class: "section-heading__title gradient-text", {t!("docs-faq-heading")} }
                div { class: "accordion",
                    for (idx, entry) in FAQ.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: if accordion.is_open(idx) { "accordion__item accordion__item--open" } else { "accordion__item" },
                            button {
                                r#type: "button",
                                class: "accordion__toggle",
                                aria_expanded: accordion.is_open(idx),
                                onclick: move |_| faq.write().toggle(idx),
                                "{entry.question}"
                            }
                            if accordion.is_open(idx) {
                                div { class: "accordion__body", "{entry.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
