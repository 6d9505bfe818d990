//! MongoDB-backed repository implementations.
//!
//! Documents are keyed by the application-level `id` field rather than the
//! store's native `_id`; every lookup and mutation filters explicitly on
//! `id`. All persisted mutations are single-document operations, atomic at
//! the store layer, so no in-process locking exists anywhere in this
//! module.

pub mod client;
pub mod index;
pub mod thread;
pub mod user;

use mongodb::error::ErrorKind;
use postbox_types::error::RepositoryError;

/// Collection holding thread documents.
pub const THREADS_COLLECTION: &str = "messages";

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Classify a driver error into the repository error kinds.
///
/// Connectivity-class failures (server selection, I/O, cleared connection
/// pools) become `Unavailable`; everything else -- malformed filters, BSON
/// (de)serialization, command errors -- is a `Query` fault.
pub(crate) fn map_store_error(err: mongodb::error::Error) -> RepositoryError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => RepositoryError::Unavailable(err.to_string()),
        _ => RepositoryError::Query(err.to_string()),
    }
}
