use std::future::Future;
use std::rc::Rc;

use api::{DemoResult, MockQueryService, QueryError, QueryService};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::content::demo_sample_buttons;
use crate::core::config::{use_site_config, PendingOnLeave};
use crate::core::format::{format_amount, format_confidence, gutter_width};
use crate::t;

use super::engine::DemoSession;

/// Shared handle to whatever backend answers demo queries.
///
/// Platforms may provide one through context; otherwise the demo falls back to
/// [`MockQueryService`] with the configured delay.
#[derive(Clone)]
pub struct QueryClient(Rc<dyn QueryService>);

impl QueryClient {
    pub fn new(service: impl QueryService + 'static) -> Self {
        Self(Rc::new(service))
    }

    pub async fn submit(&self, query: &str) -> Result<DemoResult, QueryError> {
        self.0.submit_query(query).await
    }
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

pub fn use_query_client() -> QueryClient {
    let config = use_site_config();
    let provided = try_use_context::<QueryClient>();
    use_hook(move || {
        provided.unwrap_or_else(|| QueryClient::new(MockQueryService::new(config.demo_delay_ms)))
    })
}

/// Applies a finished request to the session, unless the view that owned the
/// session has been unmounted in the meantime.
fn apply_outcome(
    mut session: Signal<DemoSession>,
    request_id: u64,
    outcome: Result<DemoResult, QueryError>,
) {
    match session.try_write() {
        Ok(mut state) => {
            if !state.resolve(request_id, outcome) {
                debug!(request_id, "ignoring outcome of superseded demo request");
            }
        }
        Err(_) => warn!(request_id, "demo view is gone; discarding query outcome"),
    }
}

/// Starts a demo request on a task whose lifetime follows `policy`:
/// `Cancel` ties it to the calling component, `Discard` to the app.
fn run_request(policy: PendingOnLeave, request: impl Future<Output = ()> + 'static) {
    match policy {
        PendingOnLeave::Cancel => {
            spawn(request);
        }
        PendingOnLeave::Discard => {
            spawn_forever(request);
        }
    }
}

#[component]
pub fn DemoView() -> Element {
    let mut session = use_signal(DemoSession::default);
    let client = use_query_client();
    let policy = use_site_config().pending_on_leave;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(ticket) = session.write().submit() else {
            return;
        };
        debug!(request_id = ticket.request_id, "demo query submitted");

        let client = client.clone();
        let request = async move {
            let outcome = client.submit(&ticket.query).await;
            if let Err(err) = &outcome {
                warn!(request_id = ticket.request_id, "demo query failed: {err}");
            }
            apply_outcome(session, ticket.request_id, outcome);
        };

        run_request(policy, request);
    };

    let state = session.read();
    let pending = state.is_pending();
    let can_submit = state.can_submit();
    let query = state.query().to_string();
    let failed = state.error().is_some();
    let result = state.result().cloned();
    drop(state);

    rsx! {
        div { class: "demo-card",
            h3 { class: "demo-card__title", {t!("demo-card-title")} }

            form { class: "demo-form", onsubmit: on_submit,
                label { class: "demo-form__label", r#for: "demo-query",
                    {t!("demo-input-label")}
                }
                textarea {
                    id: "demo-query",
                    class: "demo-form__input",
                    rows: "3",
                    placeholder: t!("demo-input-placeholder"),
                    value: "{query}",
                    oninput: move |evt: FormEvent| session.write().set_query(evt.value()),
                }
                p { class: "demo-form__hint", {t!("demo-input-hint")} }

                div { class: "demo-form__actions",
                    button {
                        r#type: "submit",
                        class: "button button--primary button--large",
                        disabled: !can_submit,
                        if pending {
                            span { class: "spinner", aria_hidden: "true" }
                            {t!("demo-submitting")}
                        } else {
                            {t!("demo-submit")}
                        }
                    }
                }
            }

            div { class: "demo-samples",
                h6 { class: "demo-samples__heading", {t!("demo-samples-heading")} }
                div { class: "demo-samples__list",
                    for sample in demo_sample_buttons().iter().copied() {
                        button {
                            key: "{sample}",
                            r#type: "button",
                            class: "button button--ghost button--small",
                            onclick: move |_| session.write().use_sample(sample),
                            "{sample}"
                        }
                    }
                }
            }

            if failed {
                div { class: "alert alert--error", role: "alert",
                    span { aria_hidden: "true", "⚠ " }
                    {t!("demo-error")}
                }
            }

            if let Some(result) = result {
                ResultPanel { result }
            }
        }
    }
}

#[component]
fn ResultPanel(result: DemoResult) -> Element {
    let analysis = &result.nlp_analysis;
    let intent = analysis.intent.as_str();
    let processing_time = analysis.processing_time.as_str();
    let confidence = format_confidence(analysis.confidence);
    let explanation = result.explanation.as_str();

    rsx! {
        div { class: "demo-results",
            h5 { class: "demo-results__heading",
                span { class: "demo-results__check", aria_hidden: "true", "✓ " }
                {t!("demo-results-heading")}
            }

            section { class: "result-card result-card--analysis",
                header { class: "result-card__header", {t!("demo-analysis-heading")} }
                div { class: "result-card__body result-card__grid",
                    div { class: "result-field",
                        strong { {t!("demo-intent")} }
                        span { class: "badge badge--success", "{intent}" }
                    }
                    div { class: "result-field",
                        strong { {t!("demo-confidence")} }
                        span { class: "result-field__value result-field__value--success", "{confidence}" }
                    }
                    div { class: "result-field",
                        strong { {t!("demo-entities")} }
                        div { class: "result-field__badges",
                            for entity in analysis.entities.iter() {
                                span { key: "{entity}", class: "badge badge--info", "{entity}" }
                            }
                        }
                    }
                    div { class: "result-field",
                        strong { {t!("demo-processing-time")} }
                        span { class: "result-field__value", "{processing_time}" }
                    }
                }
            }

            section { class: "result-card result-card--sql",
                header { class: "result-card__header", {t!("demo-sql-heading")} }
                SqlBlock { sql: result.generated_sql.clone() }
            }

            section { class: "result-card result-card--explanation",
                header { class: "result-card__header", {t!("demo-explanation-heading")} }
                p { class: "result-card__body", "{explanation}" }
            }

            section { class: "result-card result-card--rows",
                header { class: "result-card__header", {t!("demo-sample-results-heading")} }
                div { class: "result-card__body table-scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { {t!("demo-col-id")} }
                                th { {t!("demo-col-name")} }
                                th { {t!("demo-col-email")} }
                                th { {t!("demo-col-amount")} }
                                th { {t!("demo-col-date")} }
                            }
                        }
                        tbody {
                            for (idx, row) in result.sample_results.iter().enumerate() {
                                tr { key: "{idx}",
                                    td { {row.id.to_string()} }
                                    td { {row.name.clone()} }
                                    td { {row.email.clone()} }
                                    td { {format_amount(row.amount)} }
                                    td { {row.created_at.clone()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// SQL listing with a right-aligned line-number gutter.
#[component]
pub fn SqlBlock(sql: String) -> Element {
    let line_count = sql.lines().count();
    let width = gutter_width(line_count);
    let lines: Vec<(String, String)> = sql
        .lines()
        .enumerate()
        .map(|(idx, line)| (format!("{:>width$}", idx + 1), line.to_string()))
        .collect();

    rsx! {
        pre { class: "sql-block",
            code {
                for (number, text) in lines {
                    div { key: "{number}", class: "sql-block__line",
                        span { class: "sql-block__gutter", "{number}" }
                        span { class: "sql-block__text", "{text}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::QueryTicket;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static SESSION: RefCell<Option<Signal<DemoSession>>> = const { RefCell::new(None) };
        static SHOW_OWNER: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
        static POLICY: Cell<PendingOnLeave> = const { Cell::new(PendingOnLeave::Cancel) };
        static REQUEST_DROPPED: Cell<bool> = const { Cell::new(false) };
    }

    #[component]
    fn SessionHolder() -> Element {
        let session = use_signal(DemoSession::default);
        SESSION.with(|slot| *slot.borrow_mut() = Some(session));
        rsx! { div {} }
    }

    fn mounted_session() -> Signal<DemoSession> {
        SESSION.with(|slot| *slot.borrow()).expect("holder rendered")
    }

    fn submit(dom: &VirtualDom, mut session: Signal<DemoSession>) -> QueryTicket {
        dom.in_runtime(|| {
            let mut state = session.write();
            state.set_query("Find the top 10 products by revenue");
            state.submit()
        })
        .expect("non-empty query submits")
    }

    #[test]
    fn outcome_after_unmount_is_dropped_quietly() {
        let mut dom = VirtualDom::new(SessionHolder);
        dom.rebuild_in_place();
        let session = mounted_session();
        let ticket = submit(&dom, session);

        drop(dom);

        let outcome = Ok(MockQueryService::build_result(&ticket.query));
        apply_outcome(session, ticket.request_id, outcome);
        assert!(session.try_peek().is_err());
    }

    #[test]
    fn outcome_for_another_request_leaves_session_pending() {
        let mut dom = VirtualDom::new(SessionHolder);
        dom.rebuild_in_place();
        let session = mounted_session();
        let ticket = submit(&dom, session);

        dom.in_runtime(|| {
            let stale = Ok(MockQueryService::build_result("older question"));
            apply_outcome(session, ticket.request_id + 1, stale);
        });
        assert!(dom.in_runtime(|| session.peek().is_pending()));

        dom.in_runtime(|| {
            let fresh = Ok(MockQueryService::build_result(&ticket.query));
            apply_outcome(session, ticket.request_id, fresh);
        });
        let answered = dom.in_runtime(|| session.peek().result().map(|r| r.original_query.clone()));
        assert_eq!(answered.as_deref(), Some(ticket.query.as_str()));
    }

    struct RequestGuard;

    impl Drop for RequestGuard {
        fn drop(&mut self) {
            REQUEST_DROPPED.with(|dropped| dropped.set(true));
        }
    }

    #[component]
    fn RequestOwner() -> Element {
        use_hook(|| {
            let guard = RequestGuard;
            run_request(POLICY.with(Cell::get), async move {
                let _guard = guard;
                std::future::pending::<()>().await;
            });
        });
        rsx! { div {} }
    }

    #[component]
    fn DemoPage() -> Element {
        let show_owner = use_signal(|| true);
        SHOW_OWNER.with(|slot| *slot.borrow_mut() = Some(show_owner));
        rsx! {
            if show_owner() {
                RequestOwner {}
            }
        }
    }

    /// Mounts a view with an in-flight request, unmounts it, and reports
    /// whether the request was dropped with it.
    fn request_dropped_on_unmount(policy: PendingOnLeave) -> bool {
        POLICY.with(|p| p.set(policy));
        REQUEST_DROPPED.with(|dropped| dropped.set(false));

        let mut dom = VirtualDom::new(DemoPage);
        dom.rebuild_in_place();
        assert!(!REQUEST_DROPPED.with(Cell::get), "request dropped before unmount");

        let mut show_owner = SHOW_OWNER.with(|slot| *slot.borrow()).expect("page rendered");
        dom.in_runtime(|| show_owner.set(false));
        dom.render_immediate(&mut NoOpMutations);

        REQUEST_DROPPED.with(Cell::get)
    }

    #[test]
    fn cancel_policy_drops_the_request_with_the_view() {
        assert!(request_dropped_on_unmount(PendingOnLeave::Cancel));
    }

    #[test]
    fn discard_policy_outlives_the_view() {
        assert!(!request_dropped_on_unmount(PendingOnLeave::Discard));
    }
}
