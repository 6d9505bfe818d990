use thiserror::Error;

/// Errors from repository operations (used by trait definitions in
/// postbox-core).
///
/// Store faults are classified at the repository boundary so callers can
/// branch on transient connectivity trouble vs. everything else. "No such
/// document" is not an error at this layer -- lookups return `Option` and
/// the domain errors below carry the not-found condition.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Errors related to thread operations.
#[derive(Debug, Error)]
pub enum ThreadError {
    #[error("thread not found")]
    NotFound,

    #[error("invalid search text: {0}")]
    InvalidSearchText(String),

    #[error("thread has no messages")]
    EmptyMessages,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Errors related to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
