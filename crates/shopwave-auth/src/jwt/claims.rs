//! Session token claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopwave_entity::user::UserRole;

/// Claims payload embedded in every session token.
///
/// Decoding is strict: unknown fields and missing required fields are
/// rejected, so a malformed payload surfaces as an invalid token rather
/// than a partially-populated identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Subject, the user ID.
    pub sub: Uuid,
    /// Email address at the time of token issuance.
    pub email: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Avatar image URL, if the user has one.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
