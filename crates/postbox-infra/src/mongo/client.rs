//! Store connection handle.
//!
//! One `StoreClient` is built at process start and handed to the repository
//! constructors (explicit dependency injection, no globals). The driver's
//! `Client` is safe to share across tasks, so `StoreClient` is `Clone`.

use mongodb::{Client, Collection};
use postbox_types::config::StoreConfig;
use postbox_types::error::RepositoryError;
use postbox_types::thread::MessageThread;
use postbox_types::user::User;

use super::{THREADS_COLLECTION, USERS_COLLECTION, map_store_error};

/// Long-lived handle over the two Postbox collections.
#[derive(Clone)]
pub struct StoreClient {
    threads: Collection<MessageThread>,
    users: Collection<User>,
}

impl StoreClient {
    /// Parse the connection URI and resolve the typed collection handles.
    ///
    /// The driver connects lazily; a bad URI fails here, an unreachable
    /// server surfaces as `Unavailable` on the first operation.
    pub async fn connect(config: &StoreConfig) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(map_store_error)?;
        let db = client.database(&config.database);

        tracing::debug!(database = %config.database, "store client initialized");

        Ok(Self {
            threads: db.collection(THREADS_COLLECTION),
            users: db.collection(USERS_COLLECTION),
        })
    }

    pub(crate) fn threads(&self) -> &Collection<MessageThread> {
        &self.threads
    }

    pub(crate) fn users(&self) -> &Collection<User> {
        &self.users
    }
}
