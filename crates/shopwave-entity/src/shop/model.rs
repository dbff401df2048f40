//! Shop entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A seller's shop. Each user owns at most one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shop {
    /// Unique shop identifier.
    pub id: Uuid,
    /// Owning user. Unique; opening a second shop is a conflict.
    pub owner_id: Uuid,
    /// Shop display name.
    pub name: String,
    /// URL-friendly form of the name.
    pub slug: String,
    /// Optional shop description.
    pub description: Option<String>,
    /// When the shop was created.
    pub created_at: DateTime<Utc>,
    /// When the shop was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to open a new shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShop {
    /// Owning user.
    pub owner_id: Uuid,
    /// Shop display name.
    pub name: String,
    /// URL-friendly form of the name.
    pub slug: String,
    /// Optional shop description.
    pub description: Option<String>,
}

impl CreateShop {
    /// Build shop creation data, deriving the slug from the name.
    pub fn new(owner_id: Uuid, name: impl Into<String>, description: Option<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            owner_id,
            name,
            slug,
            description,
        }
    }
}

/// Lowercase the name and collapse every non-alphanumeric run into a single
/// hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
