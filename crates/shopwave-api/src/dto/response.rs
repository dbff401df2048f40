//! Response DTOs.

use serde::{Deserialize, Serialize};

use shopwave_entity::address::Address;
use shopwave_entity::shop::Shop;
use shopwave_entity::user::UserProfile;

/// Body of `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Sanitized projection of the signed-in user.
    pub user: UserProfile,
}

/// Body of `GET /api/auth/me`.
///
/// `user` is `null` for missing or invalid sessions; an absent session is
/// not an error, so the status is always 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: Option<UserProfile>,
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub message: String,
    /// The freshly created account.
    pub user: UserProfile,
}

/// Generic confirmation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `GET /api/account/addresses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressListResponse {
    pub addresses: Vec<Address>,
}

/// Body of `GET /api/account/addresses/default`.
///
/// `address` is `null` when no default is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultAddressResponse {
    pub address: Option<Address>,
}

/// Body of `POST /api/account/shop`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenShopResponse {
    pub message: String,
    /// The owner with their upgraded role.
    pub user: UserProfile,
    /// The newly opened shop.
    pub shop: Shop,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub name: String,
    pub version: String,
    pub status: String,
}
