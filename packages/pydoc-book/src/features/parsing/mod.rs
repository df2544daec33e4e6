//! Parsing Feature
//!
//! Turns Python source into the declaration model the walker consumes.
//!
//! ## Structure
//! - `domain/` - ModuleDef, ClassDef, FunctionDef, Parameter models
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser, extractors

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    ClassDef, Decorator, FunctionDef, ModuleDef, Parameter, ParameterKind, ParseError,
    ParsedModule, Stmt,
};
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
