//! Concrete PostgreSQL repository implementations.

pub mod address;
pub mod shop;
pub mod user;

pub use address::AddressRepository;
pub use shop::ShopRepository;
pub use user::UserRepository;
