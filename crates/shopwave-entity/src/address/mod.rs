//! Address domain entities.

pub mod model;

pub use model::{Address, CreateAddress};
