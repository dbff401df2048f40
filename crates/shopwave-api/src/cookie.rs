//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use shopwave_auth::jwt::IssuedToken;
use shopwave_core::config::auth::AuthConfig;

/// Builds the session cookie in both its set and removal forms.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    /// Cookie name.
    name: String,
    /// Cookie max-age, matching the token TTL.
    max_age_hours: i64,
}

impl SessionCookie {
    /// Creates a cookie builder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            max_age_hours: config.token_ttl_hours as i64,
        }
    }

    /// The configured cookie name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bakes a cookie carrying the session token.
    ///
    /// HTTP-only so scripts cannot read the token; SameSite=Lax so
    /// top-level navigations still carry the session.
    pub fn bake(&self, token: &IssuedToken) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token.token.clone()))
            .http_only(true)
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::hours(self.max_age_hours))
            .build()
    }

    /// Bakes an empty, immediately expiring cookie that clears the session.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((self.name.clone(), String::new()))
            .http_only(true)
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::ZERO)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session_cookie() -> SessionCookie {
        SessionCookie::new(&AuthConfig::default())
    }

    #[test]
    fn test_bake_sets_session_attributes() {
        let issued = IssuedToken {
            token: "signed.jwt.token".to_string(),
            expires_at: Utc::now(),
        };
        let cookie = session_cookie().bake(&issued);

        assert_eq!(cookie.name(), "ShopWaveToken");
        assert_eq!(cookie.value(), "signed.jwt.token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
    }

    #[test]
    fn test_removal_expires_immediately() {
        let cookie = session_cookie().removal();

        assert_eq!(cookie.name(), "ShopWaveToken");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
