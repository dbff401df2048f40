//! Application-wide error type.
//!
//! Every fallible path in ShopWave funnels into [`AppError`], a category
//! plus a human-readable message. The API layer maps categories onto HTTP
//! status codes at the boundary; everything below it stays HTTP-agnostic.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Broad failure categories.
///
/// The wire form (see [`ErrorKind::code`]) appears in the `error` field of
/// API error envelopes, so renaming a variant is a breaking change for
/// clients that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No credentials, or credentials that failed verification.
    Authentication,
    /// Valid credentials, insufficient privilege.
    Authorization,
    /// Input rejected before any state change.
    Validation,
    /// A uniqueness rule was violated.
    Conflict,
    /// The referenced record does not exist.
    NotFound,
    /// The backing store failed.
    Database,
    /// Encoding or decoding a payload failed.
    Serialization,
    /// The deployment configuration is unusable.
    Configuration,
    /// Everything else. Details stay in the logs, not the response.
    Internal,
}

impl ErrorKind {
    /// Stable SCREAMING_SNAKE code used in API error envelopes.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Database => "DATABASE",
            Self::Serialization => "SERIALIZATION",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The error carried through every fallible `Result` in the workspace.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Failure category, mapped to an HTTP status at the API boundary.
    pub kind: ErrorKind,
    /// Human-readable description, safe to show to callers.
    pub message: String,
    /// The error that caused this one, when there is one.
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Build an error with no underlying cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Build an error that wraps the error which caused it.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// A credential failure. Sign-in uses one fixed message for every
    /// failure mode so callers cannot probe which part was wrong.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// The caller is known but lacks the required role.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// The request payload failed a policy or format check.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// A uniqueness rule (email, shop ownership) was violated.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// The referenced record does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// The backing store failed.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// The deployment configuration is unusable. Fatal at startup.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// An unexpected failure the caller can do nothing about.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, format!("JSON error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
