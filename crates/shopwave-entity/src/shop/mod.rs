//! Shop domain entities.

pub mod model;

pub use model::{CreateShop, Shop, slugify};
