use std::fmt;

/// Failure of a query submission.
///
/// The UI does not distinguish between variants; every one of them surfaces
/// as the same inline "failed to process" message and the user may resubmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query was empty after trimming. The UI normally prevents this.
    EmptyQuery,
    /// The backend accepted the query but could not process it.
    Processing(String),
    /// The backend could not be reached.
    Unavailable(String),
    /// The backend answered with a payload we could not decode.
    Decode(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::EmptyQuery => write!(f, "query is empty"),
            QueryError::Processing(reason) => write!(f, "query processing failed: {reason}"),
            QueryError::Unavailable(reason) => write!(f, "query service unavailable: {reason}"),
            QueryError::Decode(reason) => write!(f, "could not decode query result: {reason}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Decode(err.to_string())
    }
}
