//! HTTP request handlers.

pub mod account;
pub mod auth;
pub mod health;
pub mod pages;
pub mod shop;
