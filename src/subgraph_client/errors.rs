use serde::Deserialize;

/// Result type used by [`SubgraphClient`](super::SubgraphClient).
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, non-success status or an error payload from the remote.
    TransportFailure,
    /// The remote answered but a field the query relies on is absent or malformed.
    SchemaMismatch,
    /// A paginated walk failed to make progress or ran past its page cap.
    PaginationInconsistency,
    /// Not enough (or degenerate) data to compute the requested statistic.
    StatisticalPrecondition,
    /// Rejected locally before any request was made.
    InvalidConfig,
}

/// Errors returned by the subgraph client and the analytics built on it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration validation failure raised by a builder or a query.
    #[error("invalid config: {field}: {why}")]
    InvalidConfig {
        field: &'static str,
        why: &'static str,
    },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// Requests were rate limited by the server.
    #[error("rate limited: retry after {retry_after:?}s")]
    RateLimited { retry_after: Option<u64> },
    /// Raw HTTP error when the endpoint did not answer with a GraphQL body.
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    /// GraphQL `errors` array returned by the endpoint.
    #[error("subgraph returned errors: {}", messages.join("; "))]
    Remote { messages: Vec<String> },
    /// Payload did not have the shape the query template promises.
    #[error("schema mismatch at `{field}`: {why}")]
    SchemaMismatch { field: String, why: String },
    /// Watermark failed to advance or the page cap was hit.
    #[error("pagination stalled after {pages} pages at watermark {watermark}: {why}")]
    PaginationInconsistency {
        pages: usize,
        watermark: i64,
        why: &'static str,
    },
    /// Insufficient data points, zero denominators or empty series.
    #[error("statistical precondition failed: {0}")]
    StatisticalPrecondition(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            Error::Transport(_)
            | Error::RateLimited { .. }
            | Error::Http { .. }
            | Error::Remote { .. } => ErrorKind::TransportFailure,
            Error::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Error::PaginationInconsistency { .. } => ErrorKind::PaginationInconsistency,
            Error::StatisticalPrecondition(_) => ErrorKind::StatisticalPrecondition,
        }
    }

    pub(crate) fn schema(field: impl Into<String>, why: impl ToString) -> Self {
        Error::SchemaMismatch {
            field: field.into(),
            why: why.to_string(),
        }
    }

    pub(crate) fn precondition(why: impl Into<String>) -> Self {
        Error::StatisticalPrecondition(why.into())
    }
}

/// Body of a GraphQL error entry. Only the message is surfaced.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteErr {
    pub(crate) message: String,
}
