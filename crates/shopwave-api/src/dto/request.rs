//! Request DTOs with field validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// POST /api/auth/signin body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Account email.
    #[validate(email)]
    pub email: String,
    /// Account password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/auth/signup body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Account email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; strength is enforced by the password policy.
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/account/addresses body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAddressRequest {
    /// Short label, e.g. "Home".
    #[validate(length(min = 1, max = 50))]
    pub label: String,
    /// Street address.
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    /// City.
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// Province or state.
    #[validate(length(min = 1, max = 100))]
    pub province: String,
    /// Postal code.
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    /// Marks this address as the default.
    #[serde(default)]
    pub is_default: bool,
}

/// POST /api/account/shop body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OpenShopRequest {
    /// Shop display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional shop description.
    pub description: Option<String>,
}
