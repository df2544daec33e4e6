/*
 * Statement Lowering
 *
 * Walks the statements of a module or class body in source order:
 * - class_definition → Stmt::Class
 * - function_definition → Stmt::Function (async keyword included)
 * - decorated_definition → the wrapped definition, with its decorators
 * - anything else → Stmt::Other(kind)
 */

use tree_sitter::Node;

use super::class::extract_class;
use super::function::{extract_decorators, extract_function};
use crate::features::parsing::domain::Stmt;
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::utils::tree_sitter::named_children;

/// Lower every statement of a `module` or `block` node
pub fn lower_block(block: &Node, source: &str) -> Vec<Stmt> {
    named_children(block)
        .iter()
        .filter_map(|stmt| lower_statement(stmt, source))
        .collect()
}

fn lower_statement(node: &Node, source: &str) -> Option<Stmt> {
    if !node_kinds::is_definition(node.kind()) {
        return Some(Stmt::Other(node.kind().to_string()));
    }

    let (definition, decorators) = if node.kind() == node_kinds::DECORATED_DEF {
        let definition = node.child_by_field_name("definition")?;
        (definition, extract_decorators(node, source))
    } else {
        (*node, Vec::new())
    };

    match definition.kind() {
        node_kinds::CLASS_DEF => extract_class(&definition, source).map(Stmt::Class),
        node_kinds::FUNCTION_DEF => {
            extract_function(&definition, decorators, source).map(Stmt::Function)
        }
        other => Some(Stmt::Other(other.to_string())),
    }
}
