//! Ports (interfaces) for the parsing feature

pub mod parser;

pub use parser::Parser;
