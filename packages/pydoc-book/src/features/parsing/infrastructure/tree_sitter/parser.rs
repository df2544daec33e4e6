//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Parser as TSParser, Tree};

use crate::features::parsing::domain::{ModuleDef, ParseError, ParsedModule};
use crate::features::parsing::infrastructure::extractors::lower_block;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{BookError, Result};
use crate::shared::utils::tree_sitter::node_to_span;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedModule {
        let root = tree.root_node();
        let module = ModuleDef {
            body: lower_block(&root, source),
        };

        let mut errors = Vec::new();
        if root.has_error() {
            self.collect_errors(&root, &mut errors);
        }

        ParsedModule::new(module, file_path).with_errors(errors)
    }

    /// Collect parse errors
    fn collect_errors(&self, node: &tree_sitter::Node, errors: &mut Vec<ParseError>) {
        if node.is_error() || node.is_missing() {
            errors.push(ParseError {
                message: format!("Parse error at {:?}", node.kind()),
                span: node_to_span(node),
            });
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.collect_errors(&child, errors);
            }
        }
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::python()
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedModule> {
        let mut parser = TSParser::new();
        parser.set_language(&self.get_ts_language()).map_err(|e| {
            BookError::parse(format!("Failed to set language: {}", e)).with_file(file_path)
        })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| BookError::parse("Failed to parse source code").with_file(file_path))?;

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Python => matches!(ext, "py" | "pyi"),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}
