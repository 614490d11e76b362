//! Error handling for the routing system
//!
//! Three discriminable error families, per the routing contract: input
//! rejected at the boundary, upstream matcher failures surfaced verbatim,
//! and configuration problems that are fatal at construction time. A
//! clarification outcome is never an error — it is a well-formed decision.

use thiserror::Error;

pub use hc_semantic_index::IndexError;

/// Top-level error for router operations.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("upstream match failure: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<IndexError> for RouterError {
    fn from(err: IndexError) -> Self {
        RouterError::Upstream(UpstreamError::Index(err))
    }
}

/// Input validation failures, caught before any embedding call is made.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("query is {length} characters, maximum is {max}")]
    QueryTooLong { length: usize, max: usize },
}

/// Failures of the vector matcher collaborator.
///
/// Not retried here: retry policy belongs to the host service layer, which
/// can see broader system load.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("matcher returned unknown domain '{0}'")]
    UnknownDomain(String),
}

/// Construction-time configuration failures. The router refuses to start
/// rather than operate with an undefined threshold or an unusable catalog.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("confidence threshold {0} is outside [0,1]")]
    ThresholdOutOfRange(f32),

    #[error("top_k must be at least 1")]
    InvalidTopK,

    #[error("domain catalog is empty")]
    EmptyCatalog,

    #[error("duplicate domain id '{0}' in catalog")]
    DuplicateDomain(String),

    #[error("domain '{0}' has no capability descriptions")]
    EmptyDomain(String),

    #[error("failed to read catalog file: {0}")]
    CatalogRead(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
