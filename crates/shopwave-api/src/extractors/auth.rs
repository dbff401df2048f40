//! `CurrentUser` extractor for handlers that require a verified session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use shopwave_auth::AuthContext;
use shopwave_auth::jwt::Claims;
use shopwave_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified session claims, available to authenticated handlers.
///
/// Prefers the [`AuthContext`] extension inserted by the edge gate; when
/// the gate did not run (a route mounted outside it, or a handler under
/// test) the session cookie is verified directly. Rejects with 401 when
/// neither path yields a verified session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl std::ops::Deref for CurrentUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<AuthContext>() {
            if let Some(claims) = ctx.claims() {
                return Ok(CurrentUser(claims.clone()));
            }
        } else {
            let jar = CookieJar::from_headers(&parts.headers);
            let token = jar
                .get(state.session_cookie.name())
                .map(|cookie| cookie.value().to_string());
            let ctx = AuthContext::from_cookie_token(&state.jwt_decoder, token.as_deref());
            if let Some(claims) = ctx.claims() {
                return Ok(CurrentUser(claims.clone()));
            }
        }

        Err(AppError::authentication("Authentication required").into())
    }
}
