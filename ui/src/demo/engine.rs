use api::{DemoResult, QueryError};

/// Where the demo is in its request/response lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DemoPhase {
    #[default]
    Idle,
    Pending {
        request_id: u64,
    },
    Succeeded(DemoResult),
    Failed(QueryError),
}

/// A submission accepted by [`DemoSession::submit`]. The caller runs the
/// query and reports back with [`DemoSession::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub request_id: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoSession {
    query: String,
    phase: DemoPhase,
    next_request_id: u64,
}

impl DemoSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &DemoPhase {
        &self.phase
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Replaces the input with a sample question. Does not submit.
    pub fn use_sample(&mut self, sample: &str) {
        self.query = sample.to_string();
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, DemoPhase::Pending { .. })
    }

    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.query.trim().is_empty()
    }

    /// Starts a request if one may start. Clears any previous result or error.
    /// Returns `None` (and changes nothing) for blank input or while pending.
    pub fn submit(&mut self) -> Option<QueryTicket> {
        if !self.can_submit() {
            return None;
        }
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.phase = DemoPhase::Pending { request_id };
        Some(QueryTicket {
            request_id,
            query: self.query.clone(),
        })
    }

    /// Applies the outcome of `request_id`. Outcomes for any other request
    /// are ignored; returns whether the outcome was applied.
    pub fn resolve(&mut self, request_id: u64, outcome: Result<DemoResult, QueryError>) -> bool {
        match self.phase {
            DemoPhase::Pending { request_id: pending } if pending == request_id => {
                self.phase = match outcome {
                    Ok(result) => DemoPhase::Succeeded(result),
                    Err(err) => DemoPhase::Failed(err),
                };
                true
            }
            _ => false,
        }
    }

    pub fn result(&self) -> Option<&DemoResult> {
        match &self.phase {
            DemoPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match &self.phase {
            DemoPhase::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SAMPLE_QUERIES;
    use api::MockQueryService;

    fn session_with(text: &str) -> DemoSession {
        let mut session = DemoSession::default();
        session.set_query(text);
        session
    }

    #[test]
    fn blank_input_is_a_silent_no_op() {
        for text in ["", "   ", "\n\t "] {
            let mut session = session_with(text);
            let before = session.clone();
            assert!(!session.can_submit());
            assert!(session.submit().is_none());
            assert_eq!(session, before);
        }
    }

    #[test]
    fn submit_enters_pending_with_the_exact_query() {
        let mut session = session_with("  Find the top 10 products by revenue  ");
        let ticket = session.submit().expect("non-blank input submits");
        assert_eq!(ticket.query, "  Find the top 10 products by revenue  ");
        assert!(session.is_pending());
        assert!(!session.can_submit());
    }

    #[test]
    fn cannot_resubmit_while_pending() {
        let mut session = session_with("Find the top 10 products by revenue");
        session.submit().unwrap();
        assert!(session.submit().is_none());
    }

    #[test]
    fn success_exposes_result_and_reenables_submit() {
        let query = "Find the top 10 products by revenue";
        let mut session = session_with(query);
        let ticket = session.submit().unwrap();

        let applied = session.resolve(
            ticket.request_id,
            Ok(MockQueryService::build_result(&ticket.query)),
        );
        assert!(applied);

        let result = session.result().expect("success");
        assert_eq!(result.original_query, query);
        assert_eq!(result.sample_results.len(), 3);
        assert!(session.error().is_none());
        assert!(session.can_submit());
    }

    #[test]
    fn failure_surfaces_error_and_allows_retry() {
        let mut session = session_with("Which products are out of stock?");
        let ticket = session.submit().unwrap();
        session.resolve(
            ticket.request_id,
            Err(QueryError::Processing("boom".into())),
        );

        assert!(matches!(session.phase(), DemoPhase::Failed(_)));
        assert!(session.result().is_none());
        assert!(session.can_submit());
        assert!(session.submit().is_some());
        assert!(session.error().is_none(), "new submission clears the error");
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut session = session_with("first");
        let ticket = session.submit().unwrap();
        session.resolve(ticket.request_id, Ok(MockQueryService::build_result("first")));

        session.set_query("second");
        session.submit().unwrap();
        assert!(session.result().is_none());
        assert!(session.is_pending());
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let mut session = session_with("first");
        let first = session.submit().unwrap();
        session.resolve(first.request_id, Err(QueryError::Unavailable("x".into())));

        let second = session.submit().unwrap();
        assert!(!session.resolve(first.request_id, Ok(MockQueryService::build_result("first"))));
        assert!(session.is_pending());
        assert!(session.resolve(second.request_id, Ok(MockQueryService::build_result("first"))));
    }

    #[test]
    fn resolve_without_pending_request_does_nothing() {
        let mut session = DemoSession::default();
        assert!(!session.resolve(1, Ok(MockQueryService::build_result("q"))));
        assert_eq!(session.phase(), &DemoPhase::Idle);
    }

    #[test]
    fn sample_selection_fills_input_without_submitting() {
        let mut session = DemoSession::default();
        session.use_sample(SAMPLE_QUERIES[3]);
        assert_eq!(session.query(), SAMPLE_QUERIES[3]);
        assert_eq!(session.phase(), &DemoPhase::Idle);
    }

    #[test]
    fn sample_selection_while_pending_keeps_request_alive() {
        let mut session = session_with("first");
        session.submit().unwrap();
        session.use_sample(SAMPLE_QUERIES[0]);
        assert!(session.is_pending());
        assert_eq!(session.query(), SAMPLE_QUERIES[0]);
    }
}
