//! Address book handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use shopwave_core::error::AppError;
use shopwave_entity::address::{Address, CreateAddress};

use crate::dto::request::CreateAddressRequest;
use crate::dto::response::{AddressListResponse, DefaultAddressResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/account/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<AddressListResponse>> {
    let addresses = state.account_service.list_addresses(user.sub).await?;

    Ok(Json(AddressListResponse { addresses }))
}

/// POST /api/account/addresses
pub async fn create_address(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAddressRequest>,
) -> ApiResult<(StatusCode, Json<Address>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let address = state
        .account_service
        .create_address(&CreateAddress {
            user_id: user.sub,
            label: req.label,
            street: req.street,
            city: req.city,
            province: req.province,
            postal_code: req.postal_code,
            is_default: req.is_default,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(address)))
}

/// GET /api/account/addresses/default
pub async fn default_address(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<DefaultAddressResponse>> {
    let address = state.account_service.default_address(user.sub).await?;

    Ok(Json(DefaultAddressResponse { address }))
}
