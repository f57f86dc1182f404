//! HTTP handlers

pub mod health;
pub mod tokens;

pub use health::ping;
