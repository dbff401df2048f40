//! Authentication and session token configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and session token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    ///
    /// There is deliberately no baked-in fallback: an empty secret fails
    /// [`validate`](Self::validate) and the server refuses to start.
    #[serde(default)]
    pub jwt_secret: String,
    /// Session token TTL in hours. Also drives the cookie max-age.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Path unauthenticated requests to protected prefixes are redirected to.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Minimum password length accepted at sign-up.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Check invariants that deserialization cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set. Provide it in a config file or via \
                 the SHOPWAVE__AUTH__JWT_SECRET environment variable",
            ));
        }
        if self.token_ttl_hours == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_hours must be greater than zero",
            ));
        }
        if !self.sign_in_path.starts_with('/') {
            return Err(AppError::configuration(format!(
                "auth.sign_in_path must be an absolute path, got '{}'",
                self.sign_in_path
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl(),
            cookie_name: default_cookie_name(),
            sign_in_path: default_sign_in_path(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_token_ttl() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "ShopWaveToken".to_string()
}

fn default_sign_in_path() -> String {
    "/login".to_string()
}

fn default_password_min() -> usize {
    8
}
