//! # shopwave-core
//!
//! Foundation crate: the configuration schema and the shared error type.
//! Nothing here depends on any other ShopWave crate.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
