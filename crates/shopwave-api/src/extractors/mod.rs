//! Typed request extractors.

pub mod auth;
pub mod identity;

pub use auth::CurrentUser;
pub use identity::ForwardedIdentity;
