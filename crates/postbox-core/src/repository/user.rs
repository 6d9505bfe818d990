//! UserRepository trait definition.

use postbox_types::error::RepositoryError;
use postbox_types::user::User;

/// Repository trait for user record persistence.
///
/// Users have no replace operation -- the record is immutable once created,
/// apart from deletion.
pub trait UserRepository: Send + Sync {
    /// Persist a new user document.
    fn insert(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Look up a user by its application-level `id` field.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Delete the document matching `id`. Deleting zero documents is a
    /// success, same as for threads.
    fn delete(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
