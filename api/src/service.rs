use futures::future::{FutureExt, LocalBoxFuture};
use tracing::{debug, info};

use crate::error::QueryError;
use crate::timing::sleep_ms;
use crate::types::{DemoResult, NlpAnalysis, SampleRow};

/// Simulated round-trip for the mock backend.
pub const DEFAULT_DELAY_MS: u64 = 2_000;

pub type QueryFuture<'a> = LocalBoxFuture<'a, Result<DemoResult, QueryError>>;

/// Turns a natural-language question into a [`DemoResult`].
///
/// The UI runs on a single-threaded executor (browser event loop or the
/// desktop webview), so returned futures are not required to be `Send`.
pub trait QueryService {
    fn submit_query<'a>(&'a self, query: &'a str) -> QueryFuture<'a>;
}

const MOCK_INTENT: &str = "DATA_RETRIEVAL";
const MOCK_ENTITIES: [&str; 3] = ["customers", "purchases", "last month"];
const MOCK_CONFIDENCE: f64 = 0.95;
const MOCK_PROCESSING_TIME: &str = "4.2ms";

const MOCK_SQL: &str = "SELECT c.id, c.name, c.email, o.amount, o.created_at
FROM customers c
JOIN orders o ON c.id = o.customer_id
WHERE o.created_at >= DATE_SUB(NOW(), INTERVAL 1 MONTH)
ORDER BY o.created_at DESC;";

const MOCK_EXPLANATION: &str = "This query retrieves customer information along with their purchase details from the last month. The NLP system identified the intent as data retrieval, extracted entities like 'customers', 'purchases', and 'last month', then generated an optimized SQL query with proper joins and date filtering.";

const MOCK_ROWS: [(u32, &str, &str, f64, &str); 3] = [
    (1, "John Doe", "john@example.com", 299.99, "2024-01-15"),
    (2, "Jane Smith", "jane@example.com", 149.50, "2024-01-14"),
    (3, "Bob Johnson", "bob@example.com", 89.99, "2024-01-13"),
];

/// Stand-in backend: waits `delay_ms`, then returns a constant payload that
/// only echoes the submitted query. It never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct MockQueryService {
    pub delay_ms: u64,
}

impl Default for MockQueryService {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}

impl MockQueryService {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// The constant payload, parameterised only by the original query text.
    pub fn build_result(query: &str) -> DemoResult {
        DemoResult {
            original_query: query.to_string(),
            nlp_analysis: NlpAnalysis {
                intent: MOCK_INTENT.to_string(),
                entities: MOCK_ENTITIES.iter().map(|e| e.to_string()).collect(),
                confidence: MOCK_CONFIDENCE,
                processing_time: MOCK_PROCESSING_TIME.to_string(),
            },
            generated_sql: MOCK_SQL.to_string(),
            explanation: MOCK_EXPLANATION.to_string(),
            sample_results: MOCK_ROWS
                .iter()
                .map(|(id, name, email, amount, created_at)| SampleRow {
                    id: *id,
                    name: name.to_string(),
                    email: email.to_string(),
                    amount: *amount,
                    created_at: created_at.to_string(),
                })
                .collect(),
        }
    }
}

impl QueryService for MockQueryService {
    fn submit_query<'a>(&'a self, query: &'a str) -> QueryFuture<'a> {
        async move {
            if query.trim().is_empty() {
                return Err(QueryError::EmptyQuery);
            }
            debug!(delay_ms = self.delay_ms, "simulating query round-trip");
            sleep_ms(self.delay_ms).await;
            info!(chars = query.chars().count(), "mock query resolved");
            Ok(Self::build_result(query))
        }
        .boxed_local()
    }
}

/// Always fails after its delay. Lets the failure branch of the demo be
/// driven without a real backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FailingQueryService {
    pub delay_ms: u64,
    pub reason: String,
}

impl FailingQueryService {
    pub fn new(delay_ms: u64, reason: impl Into<String>) -> Self {
        Self {
            delay_ms,
            reason: reason.into(),
        }
    }
}

impl QueryService for FailingQueryService {
    fn submit_query<'a>(&'a self, _query: &'a str) -> QueryFuture<'a> {
        async move {
            sleep_ms(self.delay_ms).await;
            Err(QueryError::Processing(self.reason.clone()))
        }
        .boxed_local()
    }
}

/// Decode a backend response body.
pub fn decode_result(body: &str) -> Result<DemoResult, QueryError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn mock_payload_echoes_query_verbatim() {
        let query = "  Find the top 10 products by revenue ";
        let result = MockQueryService::build_result(query);
        assert_eq!(result.original_query, query);
        assert_eq!(result.nlp_analysis.intent, "DATA_RETRIEVAL");
        assert_eq!(
            result.nlp_analysis.entities,
            vec!["customers", "purchases", "last month"]
        );
        assert_eq!(result.sql_line_count(), 5);
    }

    #[test]
    fn mock_rows_are_fixed() {
        let rows = MockQueryService::build_result("q").sample_results;
        let summary: Vec<(u32, &str, f64)> = rows
            .iter()
            .map(|r| (r.id, r.name.as_str(), r.amount))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "John Doe", 299.99),
                (2, "Jane Smith", 149.50),
                (3, "Bob Johnson", 89.99),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn mock_resolves_after_configured_delay() {
        let service = MockQueryService::default();
        let started = tokio::time::Instant::now();
        let result = service
            .submit_query("Find the top 10 products by revenue")
            .await
            .expect("mock never fails");
        assert!(started.elapsed() >= Duration::from_millis(DEFAULT_DELAY_MS));
        assert_eq!(result.original_query, "Find the top 10 products by revenue");
        assert_eq!(result.generated_sql, MOCK_SQL);
    }

    #[tokio::test(start_paused = true)]
    async fn mock_rejects_blank_query_without_waiting() {
        let service = MockQueryService::new(10_000);
        let started = tokio::time::Instant::now();
        let err = service.submit_query("   ").await.unwrap_err();
        assert_eq!(err, QueryError::EmptyQuery);
        assert!(started.elapsed() < Duration::from_millis(10_000));
    }

    #[tokio::test(start_paused = true)]
    async fn failing_service_reports_processing_error() {
        let service = FailingQueryService::new(50, "backend offline");
        let err = service.submit_query("anything").await.unwrap_err();
        assert_eq!(err, QueryError::Processing("backend offline".into()));
    }

    #[test]
    fn decodes_backend_shaped_json() {
        let body = r#"{
            "originalQuery": "Show me all customers",
            "nlpAnalysis": {
                "intent": "DATA_RETRIEVAL",
                "entities": ["customers"],
                "confidence": 0.91,
                "processingTime": "3.9ms"
            },
            "generatedSQL": "SELECT c.id, c.name, c.email, c.created_at;\nFROM customers c;",
            "explanation": "text",
            "sampleResults": [
                {"id": 1, "name": "John Doe", "email": "john@example.com", "amount": 0.0, "created_at": "2024-01-15"}
            ]
        }"#;
        let result = decode_result(body).expect("valid payload");
        assert_eq!(result.original_query, "Show me all customers");
        assert_eq!(result.nlp_analysis.processing_time, "3.9ms");
        assert_eq!(result.sample_results.len(), 1);
    }

    #[test]
    fn decode_failure_is_typed() {
        let err = decode_result("{\"originalQuery\": 3}").unwrap_err();
        assert!(matches!(err, QueryError::Decode(_)));
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let json = serde_json::to_value(MockQueryService::build_result("q")).unwrap();
        assert!(json.get("generatedSQL").is_some());
        assert!(json["nlpAnalysis"].get("processingTime").is_some());
        assert!(json["sampleResults"][0].get("created_at").is_some());
    }
}
