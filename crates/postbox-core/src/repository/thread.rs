//! ThreadRepository trait definition.
//!
//! Maps thread operations onto document-store primitives: insert-one,
//! find-one, replace-one, delete-one, and a filtered find plus count.

use postbox_types::error::RepositoryError;
use postbox_types::thread::{MessageThread, ThreadPage, ThreadQuery};

/// Repository trait for message thread persistence.
///
/// Implementations live in postbox-infra (e.g., `MongoThreadRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread document.
    fn insert(
        &self,
        thread: &MessageThread,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Look up a thread by its application-level `id` field.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<MessageThread>, RepositoryError>> + Send;

    /// Full-document replace keyed by `id`.
    ///
    /// A replace that matches no document is a success at the store level;
    /// no existence check is performed.
    fn replace(
        &self,
        id: &str,
        thread: &MessageThread,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete the document matching `id`.
    ///
    /// Deleting zero documents is a success; callers cannot tell whether
    /// anything was actually removed.
    fn delete(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Run the filtered, paginated find (ordered by thread `date`
    /// descending) plus an independent count of every document matching
    /// the same filter.
    ///
    /// The find and the count are two separate reads, not an atomic
    /// snapshot; under concurrent writes the page and the total can
    /// disagree by a small margin.
    fn query(
        &self,
        query: &ThreadQuery,
    ) -> impl std::future::Future<Output = Result<ThreadPage, RepositoryError>> + Send;
}
