//! Reads the identity headers injected by the edge gate.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::middleware::gate;

/// Identity fields forwarded by the edge gate as plain request headers.
///
/// Empty strings mean the field is absent. This is the string-keyed
/// boundary contract read by server-rendered pages; API handlers should
/// prefer [`CurrentUser`](crate::extractors::CurrentUser).
#[derive(Debug, Clone, Default)]
pub struct ForwardedIdentity {
    /// Subject id, as a string.
    pub user_id: String,
    /// Role in uppercase wire form.
    pub role: String,
    /// Email address.
    pub email: String,
    /// Avatar reference.
    pub image: String,
}

impl<S> FromRequestParts<S> for ForwardedIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            user_id: header(gate::HEADER_USER_ID),
            role: header(gate::HEADER_USER_ROLE),
            email: header(gate::HEADER_USER_EMAIL),
            image: header(gate::HEADER_USER_IMAGE),
        })
    }
}
