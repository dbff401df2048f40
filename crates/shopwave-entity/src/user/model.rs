//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;
use crate::address::Address;

/// A registered user of the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, stored lowercase).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Marketplace role.
    pub role: UserRole,
    /// Avatar image URL.
    pub image_url: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Avatar image URL (optional).
    pub image_url: Option<String>,
}

/// Sanitized user projection returned to clients.
///
/// Never carries the password hash; this is the shape both session read
/// paths (the who-am-I endpoint and the forwarded identity headers)
/// derive from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Marketplace role.
    pub role: UserRole,
    /// Avatar image URL.
    pub image_url: Option<String>,
    /// The user's address book.
    pub addresses: Vec<Address>,
}

impl UserProfile {
    /// Build a projection from a user row and their addresses.
    pub fn from_user(user: &User, addresses: Vec<Address>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            image_url: user.image_url.clone(),
            addresses,
        }
    }
}
