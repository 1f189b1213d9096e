//! Wire types for a processed query.
//!
//! Field names follow the JSON the NL2SQL backend emits (`originalQuery`,
//! `generatedSQL`, ...) so a real response decodes without an adapter layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoResult {
    pub original_query: String,
    pub nlp_analysis: NlpAnalysis,
    #[serde(rename = "generatedSQL")]
    pub generated_sql: String,
    pub explanation: String,
    #[serde(default)]
    pub sample_results: Vec<SampleRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NlpAnalysis {
    /// Classification label such as `DATA_RETRIEVAL`.
    pub intent: String,
    #[serde(default)]
    pub entities: Vec<String>,
    /// In `0.0..=1.0`.
    pub confidence: f64,
    /// Pre-formatted, e.g. `"4.2ms"`.
    pub processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub created_at: String,
}

impl DemoResult {
    /// Number of lines in the generated SQL, used for the line-number gutter.
    pub fn sql_line_count(&self) -> usize {
        self.generated_sql.lines().count()
    }
}
