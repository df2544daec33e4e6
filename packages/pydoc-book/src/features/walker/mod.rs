//! Walker Feature
//!
//! Selects the documentable declarations of a parsed module.

mod domain;
mod select;

pub use domain::{DocUnit, MethodUnit};
pub use select::{is_private, walk_module, CONSTRUCTOR, PRIVACY_MARKER};
