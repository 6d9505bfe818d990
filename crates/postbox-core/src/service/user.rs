//! User service: ID/timestamp policy and store access.

use postbox_types::error::UserError;
use postbox_types::user::User;
use uuid::Uuid;

use crate::repository::user::UserRepository;

/// Service owning the user lifecycle over a `UserRepository`.
///
/// Users are create/get/delete only -- there is no update operation, so
/// `id` and `date` stay exactly as assigned at creation.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user.
    ///
    /// Assigns a fresh unique `id` and the current time as `date`; caller-
    /// supplied values for both are overwritten. Profile fields pass
    /// through unchanged.
    pub async fn create(&self, mut user: User) -> Result<User, UserError> {
        user.id = Uuid::new_v4().to_string();
        user.date = chrono::Utc::now().timestamp();

        self.repo.insert(&user).await?;
        Ok(user)
    }

    /// Get a user by ID.
    pub async fn get(&self, id: &str) -> Result<User, UserError> {
        self.repo.find_by_id(id).await?.ok_or(UserError::NotFound)
    }

    /// Delete a user document. Deleting a missing user is a success.
    pub async fn delete(&self, id: &str) -> Result<(), UserError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
