//! Application state wiring the services to the MongoDB repositories.
//!
//! Services are generic over the repository traits; AppState pins them to
//! the concrete mongo implementations, all sharing one `StoreClient` built
//! at startup.

use std::sync::Arc;

use postbox_core::service::thread::ThreadService;
use postbox_core::service::user::UserService;
use postbox_infra::mongo::client::StoreClient;
use postbox_infra::mongo::thread::MongoThreadRepository;
use postbox_infra::mongo::user::MongoUserRepository;
use postbox_types::config::ServiceConfig;

/// Concrete type aliases for the service generics pinned to the mongo
/// implementations.
pub type ConcreteThreadService = ThreadService<MongoThreadRepository>;
pub type ConcreteUserService = UserService<MongoUserRepository>;

/// Shared application state holding the services and the store handle.
#[derive(Clone)]
pub struct AppState {
    pub thread_service: Arc<ConcreteThreadService>,
    pub user_service: Arc<ConcreteUserService>,
    pub store: StoreClient,
}

impl AppState {
    /// Connect to the document store and wire the services.
    pub async fn init(config: &ServiceConfig) -> anyhow::Result<Self> {
        let store = StoreClient::connect(&config.store).await?;

        let thread_service = ThreadService::new(MongoThreadRepository::new(store.clone()));
        let user_service = UserService::new(MongoUserRepository::new(store.clone()));

        Ok(Self {
            thread_service: Arc::new(thread_service),
            user_service: Arc::new(user_service),
            store,
        })
    }
}
