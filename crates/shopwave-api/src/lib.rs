//! # shopwave-api
//!
//! HTTP layer for ShopWave: the Axum router, the edge gate middleware, the
//! session cookie builder, request/response DTOs, typed extractors, and
//! the `AppError` to HTTP response mapping.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use cookie::SessionCookie;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
