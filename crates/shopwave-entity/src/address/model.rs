//! Shipping address entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A shipping address in a user's address book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    /// Unique address identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Short label, e.g. "Home" or "Office".
    pub label: String,
    /// Street address line.
    pub street: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Whether this is the user's default shipping address.
    /// At most one address per user carries this flag.
    pub is_default: bool,
    /// When the address was created.
    pub created_at: DateTime<Utc>,
    /// When the address was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAddress {
    /// Owning user.
    pub user_id: Uuid,
    /// Short label.
    pub label: String,
    /// Street address line.
    pub street: String,
    /// City.
    pub city: String,
    /// Province or state.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Whether to make this the default shipping address.
    pub is_default: bool,
}
