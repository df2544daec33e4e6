//! Feature modules
//!
//! Each slice owns one step of turning a Python file into a chapter:
//! parsing → directives → walker (+ signature) → render, with summary
//! deciding whether a chapter exists at all.

pub mod directives;
pub mod parsing;
pub mod render;
pub mod signature;
pub mod summary;
pub mod walker;
