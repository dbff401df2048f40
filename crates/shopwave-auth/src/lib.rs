//! # shopwave-auth
//!
//! Session token issuance and verification, password hashing, and password
//! policy enforcement for the ShopWave marketplace.
//!
//! ## Modules
//!
//! - `jwt`: session token creation and strongly-typed validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `context`: per-request verification outcome ([`AuthContext`])

pub mod context;
pub mod jwt;
pub mod password;

pub use context::AuthContext;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
