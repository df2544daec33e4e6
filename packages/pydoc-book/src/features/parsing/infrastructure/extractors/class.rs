/*
 * Class Extraction
 *
 * Lowers a class_definition node into a ClassDef:
 * - Name
 * - Docstring
 * - Body statements (methods, nested classes, assignments) in source order
 */

use tree_sitter::Node;

use super::docstring::extract_docstring;
use super::statement::lower_block;
use crate::features::parsing::domain::ClassDef;
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::utils::tree_sitter::{field_text, node_to_span};

/// Extract class metadata from a class_definition node
pub fn extract_class(node: &Node, source: &str) -> Option<ClassDef> {
    if node.kind() != node_kinds::CLASS_DEF {
        return None;
    }

    let name = field_text(node, "name", source)?;
    let block = node.child_by_field_name("body");

    let docstring = block.and_then(|body| extract_docstring(&body, source));
    let body = block
        .map(|body| lower_block(&body, source))
        .unwrap_or_default();

    Some(ClassDef {
        name,
        docstring,
        body,
        span: node_to_span(node),
    })
}
