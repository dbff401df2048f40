//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use shopwave_auth::jwt::JwtDecoder;
use shopwave_core::config::AppConfig;
use shopwave_service::{AccountService, AuthService, ShopService};

use crate::cookie::SessionCookie;
use crate::middleware::gate::GateRules;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Session token verifier used by the gate and extractors.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session cookie builder.
    pub session_cookie: Arc<SessionCookie>,
    /// Compiled protected-prefix rules.
    pub gate_rules: Arc<GateRules>,
    /// Sign-in, sign-up, and session resolution.
    pub auth_service: Arc<AuthService>,
    /// Address book operations.
    pub account_service: Arc<AccountService>,
    /// Shop upgrade flow.
    pub shop_service: Arc<ShopService>,
}
