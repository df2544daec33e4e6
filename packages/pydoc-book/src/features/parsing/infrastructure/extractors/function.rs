/*
 * Function Extraction
 *
 * Lowers a function_definition node into a FunctionDef:
 * - Name
 * - async flag
 * - Decorators (supplied by the enclosing decorated_definition)
 * - Parameters (structured, see parameter.rs)
 * - Return annotation
 * - Docstring
 */

use tree_sitter::Node;

use super::docstring::extract_docstring;
use super::parameter::extract_parameters;
use crate::features::parsing::domain::{Decorator, FunctionDef};
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::utils::tree_sitter::{
    extract_node_text, field_text, field_text_single_line, find_child_by_kind,
    find_children_by_kind, named_children, node_to_span,
};

/// Extract function metadata from a function_definition node
pub fn extract_function(node: &Node, decorators: Vec<Decorator>, source: &str) -> Option<FunctionDef> {
    if node.kind() != node_kinds::FUNCTION_DEF {
        return None;
    }

    let name = field_text(node, "name", source)?;

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| extract_parameters(&params, source))
        .unwrap_or_default();

    let docstring = node
        .child_by_field_name("body")
        .and_then(|body| extract_docstring(&body, source));

    Some(FunctionDef {
        name,
        is_async: is_async_function(node),
        decorators,
        parameters,
        returns: field_text_single_line(node, "return_type", source),
        docstring,
        span: node_to_span(node),
    })
}

/// `async def` carries an anonymous `async` token as a direct child
fn is_async_function(node: &Node) -> bool {
    find_child_by_kind(node, node_kinds::ASYNC).is_some()
}

/// Collect the decorators of a decorated_definition, outermost first
pub fn extract_decorators(decorated: &Node, source: &str) -> Vec<Decorator> {
    find_children_by_kind(decorated, node_kinds::DECORATOR)
        .iter()
        .filter_map(|decorator| {
            let expr = named_children(decorator).into_iter().next()?;
            let name = (expr.kind() == node_kinds::IDENTIFIER)
                .then(|| extract_node_text(&expr, source).to_string());
            Some(Decorator {
                expression: extract_node_text(&expr, source).to_string(),
                name,
            })
        })
        .collect()
}
