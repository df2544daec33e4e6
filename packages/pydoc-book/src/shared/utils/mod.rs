//! Shared utilities

pub mod paths;
pub mod tree_sitter;

pub use paths::normalize_path;
