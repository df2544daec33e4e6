//! Parsed module representation
//!
//! Wraps the declaration model together with the diagnostics tree-sitter reported.

use super::module_def::ModuleDef;
use crate::shared::models::Span;

/// Result of parsing one source file
#[derive(Debug, Clone)]
pub struct ParsedModule {
    pub module: ModuleDef,

    /// File path (for log and error messages)
    pub file_path: String,

    /// Whether parsing had errors
    pub has_errors: bool,

    /// Parse errors (if any)
    pub errors: Vec<ParseError>,
}

/// Parse error
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParsedModule {
    pub fn new(module: ModuleDef, file_path: impl Into<String>) -> Self {
        Self {
            module,
            file_path: file_path.into(),
            has_errors: false,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<ParseError>) -> Self {
        self.has_errors = !errors.is_empty();
        self.errors = errors;
        self
    }
}
