//! ShopWave Auth Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use shopwave_core::config::AppConfig;
use shopwave_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `SHOPWAVE_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SHOPWAVE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShopWave v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Connect stores + run migrations ──────────────────
    tracing::info!(
        "Connecting to store provider '{}'...",
        config.database.provider
    );
    let stores = shopwave_database::Stores::connect(&config.database).await?;
    tracing::info!("Store provider ready");

    // ── Step 2: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(shopwave_auth::password::PasswordHasher::new());
    let password_policy = Arc::new(shopwave_auth::password::PasswordPolicy::new(&config.auth));
    let jwt_encoder = Arc::new(shopwave_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(shopwave_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Step 3: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let auth_service = Arc::new(shopwave_service::AuthService::new(
        stores.users.clone(),
        stores.addresses.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&password_policy),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let account_service = Arc::new(shopwave_service::AccountService::new(
        stores.addresses.clone(),
    ));
    let shop_service = Arc::new(shopwave_service::ShopService::new(
        stores.users.clone(),
        stores.shops.clone(),
    ));
    tracing::info!("Services initialized");

    // ── Step 4: Compile gate rules ───────────────────────────────
    let session_cookie = Arc::new(shopwave_api::cookie::SessionCookie::new(&config.auth));
    let gate_rules = Arc::new(shopwave_api::middleware::gate::GateRules::from_config(
        &config.gate,
        &config.auth,
    )?);
    tracing::info!(rules = gate_rules.len(), "Edge gate rules compiled");

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = shopwave_api::state::AppState {
        config: Arc::new(config),
        jwt_decoder,
        session_cookie,
        gate_rules,
        auth_service,
        account_service,
        shop_service,
    };

    let app = shopwave_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ShopWave server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, draining connections...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("ShopWave server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
