//! Query capability for the NL2SQL site.
//!
//! The demo page never talks to a real backend. It calls a [`QueryService`]
//! and renders whatever [`DemoResult`] comes back; [`MockQueryService`] stands
//! in for the backend by waiting a fixed delay and echoing the query into a
//! constant payload. A real integration only has to implement the trait.

mod error;
mod schema;
mod service;
pub mod timing;
mod types;

pub use error::QueryError;
pub use schema::{ColumnInfo, HealthReport, SchemaCatalog, TableInfo};
pub use service::{
    decode_result, FailingQueryService, MockQueryService, QueryFuture, QueryService,
    DEFAULT_DELAY_MS,
};
pub use types::{DemoResult, NlpAnalysis, SampleRow};
