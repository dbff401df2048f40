//! Address repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shopwave_core::error::{AppError, ErrorKind};
use shopwave_core::result::AppResult;
use shopwave_entity::address::{Address, CreateAddress};

use crate::store::AddressStore;

/// PostgreSQL-backed address store.
#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    /// Create a new address repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressStore for AddressRepository {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Address>> {
        sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list addresses", e))
    }

    async fn create(&self, data: &CreateAddress) -> AppResult<Address> {
        sqlx::query_as::<_, Address>(
            "INSERT INTO addresses (user_id, label, street, city, province, postal_code, is_default) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.label)
        .bind(&data.street)
        .bind(&data.city)
        .bind(&data.province)
        .bind(&data.postal_code)
        .bind(data.is_default)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create address", e))
    }

    async fn find_default(&self, user_id: Uuid) -> AppResult<Option<Address>> {
        sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE user_id = $1 AND is_default = TRUE LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find default address", e))
    }

    async fn clear_default(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE addresses SET is_default = FALSE, updated_at = NOW() \
             WHERE user_id = $1 AND is_default = TRUE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear default address", e))?;
        Ok(())
    }
}
