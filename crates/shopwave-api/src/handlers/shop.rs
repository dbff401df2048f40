//! Shop upgrade handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use shopwave_core::error::AppError;
use shopwave_entity::user::UserProfile;

use crate::dto::request::OpenShopRequest;
use crate::dto::response::OpenShopResponse;
use crate::error::ApiResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/account/shop
///
/// Opens a shop and promotes the user to seller. The session token is
/// re-issued and the cookie rotated so the stateless gate sees the new
/// role on the very next request.
pub async fn open_shop(
    State(state): State<AppState>,
    user: CurrentUser,
    jar: CookieJar,
    Json(req): Json<OpenShopRequest>,
) -> ApiResult<(StatusCode, CookieJar, Json<OpenShopResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let OpenShopRequest { name, description } = req;

    let (shop, updated) = state
        .shop_service
        .open_shop(user.sub, &name, description)
        .await?;

    let token = state.auth_service.issue_token(&updated)?;
    let jar = jar.add(state.session_cookie.bake(&token));

    let addresses = state.account_service.list_addresses(updated.id).await?;

    Ok((
        StatusCode::CREATED,
        jar,
        Json(OpenShopResponse {
            message: "Shop opened".to_string(),
            user: UserProfile::from_user(&updated, addresses),
            shop,
        }),
    ))
}
