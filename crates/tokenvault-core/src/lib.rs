//! TokenVault - Core Library
//!
//! Shared types, the error taxonomy and the fixed storage location used by
//! the server and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
