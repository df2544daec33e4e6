//! Shared module - Common types and utilities
//!
//! Types used by every feature slice. Only `utils::tree_sitter` touches the parser crate.

pub mod models;
pub mod utils;

pub use models::*;
