//! Shared helpers for integration tests.
//!
//! Builds the full router over the in-memory store provider, so the suite
//! runs without PostgreSQL or any other external service.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use shopwave_api::cookie::SessionCookie;
use shopwave_api::middleware::gate::GateRules;
use shopwave_api::router::build_router;
use shopwave_api::state::AppState;
use shopwave_auth::jwt::{JwtDecoder, JwtEncoder};
use shopwave_auth::password::{PasswordHasher, PasswordPolicy};
use shopwave_core::config::AppConfig;
use shopwave_core::config::auth::AuthConfig;
use shopwave_core::config::database::DatabaseConfig;
use shopwave_core::config::gate::GateConfig;
use shopwave_core::config::logging::LoggingConfig;
use shopwave_core::config::server::ServerConfig;
use shopwave_database::Stores;
use shopwave_entity::user::{CreateUser, User, UserRole};
use shopwave_service::{AccountService, AuthService, ShopService};

/// Signing secret shared by the app under test and token-crafting helpers.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Configuration for the app under test: memory store, known secret,
/// everything else at defaults.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            provider: "memory".to_string(),
            ..DatabaseConfig::default()
        },
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            ..AuthConfig::default()
        },
        gate: GateConfig::default(),
        logging: LoggingConfig::default(),
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store handle for seeding fixtures directly
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub async fn new() -> Self {
        let config = test_config();
        let stores = Stores::in_memory();

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_policy = Arc::new(PasswordPolicy::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            stores.users.clone(),
            stores.addresses.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&password_policy),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
        ));
        let account_service = Arc::new(AccountService::new(stores.addresses.clone()));
        let shop_service = Arc::new(ShopService::new(stores.users.clone(), stores.shops.clone()));

        let session_cookie = Arc::new(SessionCookie::new(&config.auth));
        let gate_rules =
            Arc::new(GateRules::from_config(&config.gate, &config.auth).expect("valid gate rules"));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            jwt_decoder,
            session_cookie,
            gate_rules,
            auth_service,
            account_service,
            shop_service,
        };

        let router = build_router(app_state);

        Self {
            router,
            stores,
            config,
        }
    }

    /// Create a user directly in the store, bypassing sign-up validation
    pub async fn create_test_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> User {
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");

        self.stores
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: hash,
                role,
                image_url: None,
            })
            .await
            .expect("Failed to create test user")
    }

    /// Sign in through the API and return the session cookie token value
    pub async fn sign_in(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/signin",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-in failed: {:?}",
            response.body
        );

        response
            .session_token()
            .expect("No session cookie in sign-in response")
    }

    /// Make an HTTP request, optionally with a session cookie
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let cookie = token.map(|t| format!("{}={}", self.config.auth.cookie_name, t));
        let mut headers: Vec<(&str, &str)> = Vec::new();
        if let Some(pair) = cookie.as_deref() {
            headers.push(("cookie", pair));
        }
        self.request_with_headers(method, path, body, &headers).await
    }

    /// Make an HTTP request with arbitrary extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (Null for non-JSON responses)
    pub body: Value,
    /// Raw body text, for HTML pages
    pub text: String,
}

impl TestResponse {
    /// Raw Set-Cookie header, if present
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// Session token value from Set-Cookie; None when absent or cleared
    pub fn session_token(&self) -> Option<String> {
        let pair = self.set_cookie()?.split(';').next()?;
        let (_, value) = pair.split_once('=')?;
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Location header, for redirect assertions
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}
