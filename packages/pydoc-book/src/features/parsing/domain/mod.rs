//! Parsing domain models

mod module_def;
mod parsed_module;

pub use module_def::{
    ClassDef, Decorator, FunctionDef, ModuleDef, Parameter, ParameterKind, Stmt,
};
pub use parsed_module::{ParseError, ParsedModule};
