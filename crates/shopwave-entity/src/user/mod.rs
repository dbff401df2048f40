//! User records and roles.

pub mod model;
pub mod role;

pub use model::{CreateUser, User, UserProfile};
pub use role::UserRole;
