//! Tree-sitter Utility Functions
//!
//! Common helpers for walking tree-sitter nodes, shared by the Python extractors.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
///
/// # Example
/// ```ignore
/// let body = find_child_by_kind(&class_node, "block");
/// ```
#[inline]
pub fn find_child_by_kind<'tree>(node: &Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .find(|child| child.kind() == kind)
}

/// Find all direct children by kind
#[inline]
pub fn find_children_by_kind<'tree>(node: &Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Named children in source order, skipping extras (comments)
pub fn named_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .filter(|child| !child.is_extra())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
///
/// Out-of-range byte offsets yield an empty string instead of panicking.
#[inline]
pub fn extract_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// Text of the child stored under `field`, if present
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| extract_node_text_owned(&child, source))
}

/// Like [`field_text`], with line breaks folded by [`single_line`]
pub fn field_text_single_line(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| single_line(extract_node_text(&child, source)))
}

/// Replace every whitespace run that contains a line break with one space.
/// Runs without a line break are kept as written.
pub fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_whitespace(&mut out, &mut run);
        out.push(c);
    }
    flush_whitespace(&mut out, &mut run);
    out
}

fn flush_whitespace(out: &mut String, run: &mut String) {
    if run.contains(|c: char| c == '\n' || c == '\r') {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}
