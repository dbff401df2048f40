//! Configuration schema and loading.
//!
//! Settings are layered: `config/default.toml` first, then an optional
//! `config/{env}.toml` overlay, then `SHOPWAVE`-prefixed environment
//! variables (`SHOPWAVE__AUTH__JWT_SECRET` and friends). Later sources win.

pub mod auth;
pub mod database;
pub mod gate;
pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::gate::GateConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;

use crate::error::AppError;

/// Top-level settings tree, one field per `[section]` of the TOML files.
///
/// Every section defaults, so a missing file or a sparse overlay is fine;
/// [`AppConfig::validate`] decides afterwards whether the merged result is
/// actually runnable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Credential store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session token and password policy settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Edge gate rules.
    #[serde(default)]
    pub gate: GateConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate the layered configuration for `env`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let merged = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHOPWAVE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = merged.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject merged settings no deployment should run with.
    ///
    /// Startup treats any error from here as fatal.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        self.gate.validate()?;
        Ok(())
    }
}
