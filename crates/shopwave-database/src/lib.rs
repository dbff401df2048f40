//! # shopwave-database
//!
//! Credential store access for ShopWave. Defines the async store traits,
//! the PostgreSQL repository implementations, and an in-memory store used
//! by the test suite and throwaway environments. The backing provider is
//! selected by configuration at startup.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use store::{AddressStore, ShopStore, Stores, UserStore};
