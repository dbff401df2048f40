//! Shorthand result alias.

use crate::error::AppError;

/// `Result` pinned to [`AppError`], used by every fallible API in the
/// workspace.
pub type AppResult<T> = Result<T, AppError>;
