//! # shopwave-service
//!
//! Business logic service layer for ShopWave. Each service orchestrates
//! stores and auth components to implement application-level use cases.
//!
//! Services follow constructor injection; every dependency is provided at
//! construction time via `Arc` references, so there are no global
//! singletons anywhere in the flow.

pub mod account;
pub mod auth;
pub mod shop;

pub use account::AccountService;
pub use auth::{AuthService, SignedIn};
pub use shop::ShopService;
