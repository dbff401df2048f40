//! Edge gate configuration: protected path prefixes.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Edge gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Protected prefix rules. The longest matching prefix wins, so a more
    /// specific rule can relax the role demand of its parent prefix.
    #[serde(default = "default_rules")]
    pub rules: Vec<GateRuleConfig>,
    /// Path authenticated-but-underprivileged requests are redirected to.
    #[serde(default = "default_denied_path")]
    pub denied_path: String,
}

/// A single protected prefix rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRuleConfig {
    /// Path prefix, e.g. `/checkout`. Matches the prefix itself and any
    /// segment below it, never partial segments (`/checkout-faq` does not
    /// match).
    pub prefix: String,
    /// Minimum role required, e.g. `"SELLER"`. `None` means any valid
    /// session passes.
    #[serde(default)]
    pub role: Option<String>,
}

impl GateConfig {
    /// Check rule shapes. Role strings are parsed (and rejected) when the
    /// gate is compiled at startup.
    pub fn validate(&self) -> Result<(), AppError> {
        for rule in &self.rules {
            if !rule.prefix.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "gate rule prefix must be an absolute path, got '{}'",
                    rule.prefix
                )));
            }
            if rule.prefix.len() > 1 && rule.prefix.ends_with('/') {
                return Err(AppError::configuration(format!(
                    "gate rule prefix must not end with '/', got '{}'",
                    rule.prefix
                )));
            }
        }
        Ok(())
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            denied_path: default_denied_path(),
        }
    }
}

fn default_rules() -> Vec<GateRuleConfig> {
    vec![
        GateRuleConfig {
            prefix: "/seller/open-shop".to_string(),
            role: None,
        },
        GateRuleConfig {
            prefix: "/seller".to_string(),
            role: Some("SELLER".to_string()),
        },
        GateRuleConfig {
            prefix: "/checkout".to_string(),
            role: None,
        },
    ]
}

fn default_denied_path() -> String {
    "/".to_string()
}
