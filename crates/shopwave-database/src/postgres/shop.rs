//! Shop repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shopwave_core::error::{AppError, ErrorKind};
use shopwave_core::result::AppResult;
use shopwave_entity::shop::{CreateShop, Shop};

use crate::store::ShopStore;

/// PostgreSQL-backed shop store.
#[derive(Debug, Clone)]
pub struct ShopRepository {
    pool: PgPool,
}

impl ShopRepository {
    /// Create a new shop repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopStore for ShopRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Option<Shop>> {
        sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find shop by owner", e)
            })
    }

    async fn create(&self, data: &CreateShop) -> AppResult<Shop> {
        sqlx::query_as::<_, Shop>(
            "INSERT INTO shops (owner_id, name, slug, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("shops_owner_id_key") =>
            {
                AppError::conflict("User already owns a shop")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create shop", e),
        })
    }
}
