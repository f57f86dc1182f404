//! Storage layer
//!
//! Uses SQLite (embedded) for a single `tokens` table keyed by project name.

pub mod db;

pub use db::Database;
