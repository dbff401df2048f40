//! # shopwave-entity
//!
//! Domain models: users, addresses, and shops. Row-backed types derive
//! `sqlx::FromRow` with field names matching their table columns, so the
//! repositories can `SELECT *` into them directly.

pub mod address;
pub mod shop;
pub mod user;
