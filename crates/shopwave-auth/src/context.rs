//! Per-request verification outcome.

use crate::jwt::{Claims, JwtDecoder};

/// The edge gate's verdict for one request.
///
/// Produced once per request by the gate middleware and carried as a
/// request extension, so downstream handlers branch on a typed value
/// instead of string-keyed headers.
#[derive(Debug, Clone)]
pub enum AuthContext {
    /// No session cookie was present, or the token failed verification.
    Anonymous,
    /// A verified session.
    Authenticated {
        /// The decoded token payload.
        claims: Claims,
    },
}

impl AuthContext {
    /// Verify an optional cookie token.
    ///
    /// Verification failure never escapes as an error here: an expired,
    /// tampered, or malformed token degrades to [`AuthContext::Anonymous`],
    /// exactly like a missing cookie.
    pub fn from_cookie_token(decoder: &JwtDecoder, token: Option<&str>) -> Self {
        match token {
            Some(token) => match decoder.decode(token) {
                Ok(claims) => Self::Authenticated { claims },
                Err(_) => Self::Anonymous,
            },
            None => Self::Anonymous,
        }
    }

    /// Returns the claims when the session is verified.
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Self::Authenticated { claims } => Some(claims),
            Self::Anonymous => None,
        }
    }

    /// Returns whether a verified session is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use chrono::Utc;
    use shopwave_core::config::auth::AuthConfig;
    use shopwave_entity::user::{User, UserRole};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "context-test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Test Seller".to_string(),
            email: "seller@example.com".to_string(),
            password_hash: "unused".to_string(),
            role: UserRole::Seller,
            image_url: Some("https://cdn.example.com/avatar.png".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        let decoder = JwtDecoder::new(&test_config());
        let ctx = AuthContext::from_cookie_token(&decoder, None);
        assert!(!ctx.is_authenticated());
        assert!(ctx.claims().is_none());
    }

    #[test]
    fn test_invalid_token_degrades_to_anonymous() {
        let decoder = JwtDecoder::new(&test_config());
        let ctx = AuthContext::from_cookie_token(&decoder, Some("tampered.token.value"));
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_valid_token_is_authenticated() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user = test_user();

        let issued = encoder.issue(&user).unwrap();
        let ctx = AuthContext::from_cookie_token(&decoder, Some(&issued.token));

        let claims = ctx.claims().expect("should be authenticated");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, UserRole::Seller);
    }
}
