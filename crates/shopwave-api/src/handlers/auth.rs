//! Auth handlers: sign-in, sign-up, sign-out, who-am-I.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use shopwave_core::error::AppError;
use shopwave_entity::user::UserProfile;

use crate::dto::request::{SignInRequest, SignUpRequest};
use crate::dto::response::{MeResponse, MessageResponse, SignInResponse, SignUpResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignInRequest>,
) -> ApiResult<(CookieJar, Json<SignInResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let signed_in = state
        .auth_service
        .sign_in(&req.email, &req.password)
        .await?;
    let jar = jar.add(state.session_cookie.bake(&signed_in.token));

    Ok((
        jar,
        Json(SignInResponse {
            user: signed_in.user,
        }),
    ))
}

/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<(StatusCode, Json<SignUpResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .auth_service
        .sign_up(&req.name, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "Account created".to_string(),
            user: UserProfile::from_user(&user, Vec::new()),
        }),
    ))
}

/// POST /api/auth/signout
pub async fn sign_out(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(state.session_cookie.removal());

    (
        jar,
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    )
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> ApiResult<Json<MeResponse>> {
    let token = jar
        .get(state.session_cookie.name())
        .map(|cookie| cookie.value().to_string());
    let user = state.auth_service.current_user(token.as_deref()).await?;

    Ok(Json(MeResponse { user }))
}
