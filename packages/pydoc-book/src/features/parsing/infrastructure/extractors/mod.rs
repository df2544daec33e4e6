//! Node extractors - lower tree-sitter nodes into the declaration model

pub mod class;
pub mod docstring;
pub mod function;
pub mod parameter;
pub mod statement;

pub use class::extract_class;
pub use docstring::{clean_docstring, decode_string_literal, extract_docstring};
pub use function::extract_function;
pub use parameter::extract_parameters;
pub use statement::lower_block;
