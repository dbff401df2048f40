//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Where and how log lines are emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive. Accepts anything `tracing_subscriber::EnvFilter`
    /// understands, from a bare level (`"info"`) to per-target overrides
    /// (`"info,shopwave_api=debug"`).
    #[serde(default = "default_level")]
    pub level: String,
    /// `"json"` for machine-readable lines, `"pretty"` for humans.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}
