//! Tree-sitter based parser implementation

pub mod node_kinds;
mod parser;

pub use parser::TreeSitterParser;
