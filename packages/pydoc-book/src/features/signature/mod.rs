//! Signature Feature
//!
//! Rebuilds display signatures from the structured parameter list of a
//! [`FunctionDef`](crate::features::parsing::FunctionDef).

mod decoration;
mod normalizer;

pub use decoration::Decoration;
pub use normalizer::{constructor_parameters, format_parameter, format_parameters, normalize, without_receiver};
