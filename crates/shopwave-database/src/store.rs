//! Async store traits and the provider-dispatched store aggregate.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use shopwave_core::config::database::DatabaseConfig;
use shopwave_core::error::AppError;
use shopwave_core::result::AppResult;
use shopwave_entity::address::{Address, CreateAddress};
use shopwave_entity::shop::{CreateShop, Shop};
use shopwave_entity::user::{CreateUser, User, UserRole};

use crate::memory::MemoryStore;
use crate::postgres::{AddressRepository, ShopRepository, UserRepository};

/// Credential record access.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user. A duplicate email is a conflict.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Change a user's role, returning the updated row.
    async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<User>;
}

/// Address book access.
#[async_trait]
pub trait AddressStore: Send + Sync + std::fmt::Debug {
    /// List a user's addresses, oldest first.
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Address>>;

    /// Create a new address.
    async fn create(&self, data: &CreateAddress) -> AppResult<Address>;

    /// Find the user's default shipping address, if any.
    async fn find_default(&self, user_id: Uuid) -> AppResult<Option<Address>>;

    /// Clear the default flag on all of a user's addresses.
    async fn clear_default(&self, user_id: Uuid) -> AppResult<()>;
}

/// Shop access.
#[async_trait]
pub trait ShopStore: Send + Sync + std::fmt::Debug {
    /// Find the shop owned by the given user, if any.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Option<Shop>>;

    /// Create a new shop. A second shop for the same owner is a conflict.
    async fn create(&self, data: &CreateShop) -> AppResult<Shop>;
}

/// The store aggregate handed to the service layer.
///
/// The backing provider is selected at construction time based on
/// configuration; all fields share the same backend.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Credential records.
    pub users: Arc<dyn UserStore>,
    /// Address books.
    pub addresses: Arc<dyn AddressStore>,
    /// Shops.
    pub shops: Arc<dyn ShopStore>,
}

impl Stores {
    /// Create the store aggregate from configuration.
    ///
    /// For the postgres provider this connects the pool and runs pending
    /// migrations before handing out repositories.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store provider");
                let pool = crate::connection::connect(config).await?;
                crate::migration::run_migrations(&pool).await?;
                Ok(Self::postgres(pool))
            }
            "memory" => {
                info!("Initializing in-memory store provider");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Build the aggregate over an existing PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            addresses: Arc::new(AddressRepository::new(pool.clone())),
            shops: Arc::new(ShopRepository::new(pool)),
        }
    }

    /// Build the aggregate over a fresh in-memory store (for testing).
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            addresses: store.clone(),
            shops: store,
        }
    }
}
