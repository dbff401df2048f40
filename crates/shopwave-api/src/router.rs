//! Route definitions for the ShopWave HTTP API.
//!
//! JSON endpoints are mounted under `/api`; the placeholder pages live at
//! the root. The edge gate and request logging wrap the whole tree.

use axum::http::{HeaderName, HeaderValue, Method};
use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use shopwave_core::config::server::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Assemble the full route tree and wrap it in the middleware stack.
///
/// Layer order matters: request logging is outermost so gate redirects are
/// logged, and CORS sits outside the gate so preflight requests are
/// answered instead of redirected.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::edge_gate,
        ))
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: sign-in, sign-up, sign-out, who-am-I.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signin", post(handlers::auth::sign_in))
        .route("/auth/signup", post(handlers::auth::sign_up))
        .route("/auth/signout", post(handlers::auth::sign_out))
        .route("/auth/me", get(handlers::auth::me))
}

/// Account endpoints: address book and shop upgrade.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/account/addresses",
            get(handlers::account::list_addresses).post(handlers::account::create_address),
        )
        .route(
            "/account/addresses/default",
            get(handlers::account::default_address),
        )
        .route("/account/shop", post(handlers::shop::open_shop))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Placeholder pages demonstrating the forwarded-identity read path.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/seller", get(handlers::pages::seller_dashboard))
        .route("/seller/open-shop", get(handlers::pages::open_shop_form))
        .route("/checkout", get(handlers::pages::checkout))
        .route("/login", get(handlers::pages::sign_in_page))
}

/// Build the CORS layer from configuration.
///
/// A literal `"*"` in origins or headers selects the permissive wildcard;
/// anything else becomes an explicit allow-list, silently skipping entries
/// that fail to parse.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    cors = if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(parse_list::<HeaderValue>(&config.allowed_origins))
    };

    cors = cors.allow_methods(parse_list::<Method>(&config.allowed_methods));

    if config.allowed_headers.iter().any(|header| header == "*") {
        cors.allow_headers(Any)
    } else {
        cors.allow_headers(parse_list::<HeaderName>(&config.allowed_headers))
    }
}

fn parse_list<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|value| value.parse().ok()).collect()
}
