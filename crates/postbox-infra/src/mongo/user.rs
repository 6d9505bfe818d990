//! MongoDB user repository.

use mongodb::bson::doc;
use postbox_core::repository::user::UserRepository;
use postbox_types::error::RepositoryError;
use postbox_types::user::User;

use super::client::StoreClient;
use super::map_store_error;

/// MongoDB-backed implementation of `UserRepository` over the "users"
/// collection.
pub struct MongoUserRepository {
    store: StoreClient,
}

impl MongoUserRepository {
    /// Create a new repository backed by the given store handle.
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        self.store
            .users()
            .insert_one(user)
            .await
            .map_err(map_store_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        self.store
            .users()
            .find_one(doc! { "id": id })
            .await
            .map_err(map_store_error)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.store
            .users()
            .delete_one(doc! { "id": id })
            .await
            .map_err(map_store_error)?;
        Ok(())
    }
}
