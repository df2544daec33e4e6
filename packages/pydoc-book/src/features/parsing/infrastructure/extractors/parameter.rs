/*
 * Parameter Extraction
 *
 * Extracts a structured parameter list from a `parameters` node:
 * - Parameter names
 * - Type annotations and default values (source text, line breaks folded)
 * - Splats (*args, **kwargs) and the bare `*` / `/` separators
 *
 * Order is preserved exactly; the signature normalizer re-serializes from this.
 */

use tree_sitter::Node;

use crate::features::parsing::domain::{Parameter, ParameterKind};
use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::utils::tree_sitter::{
    extract_node_text, extract_node_text_owned, field_text, field_text_single_line,
};

/// Extract parameters from a parameters node
pub fn extract_parameters(node: &Node, source: &str) -> Vec<Parameter> {
    if node.kind() != node_kinds::PARAMETERS {
        return Vec::new();
    }

    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .filter(|child| !child.is_extra())
        .filter_map(|child| extract_parameter(&child, source))
        .collect()
}

fn extract_parameter(node: &Node, source: &str) -> Option<Parameter> {
    match node.kind() {
        // x
        node_kinds::IDENTIFIER => Some(Parameter::positional(extract_node_text(node, source))),

        // *args, **kwargs
        node_kinds::LIST_SPLAT_PATTERN | node_kinds::DICTIONARY_SPLAT_PATTERN => {
            Some(extract_splat(node, source))
        }

        // x: int, *args: int, **kwargs: str
        node_kinds::TYPED_PARAMETER => {
            let target = node.named_child(0)?;
            let param = match target.kind() {
                node_kinds::LIST_SPLAT_PATTERN | node_kinds::DICTIONARY_SPLAT_PATTERN => {
                    extract_splat(&target, source)
                }
                _ => Parameter::positional(extract_node_text(&target, source)),
            };
            Some(match field_text_single_line(node, "type", source) {
                Some(annotation) => param.with_annotation(annotation),
                None => param,
            })
        }

        // x=10
        node_kinds::DEFAULT_PARAMETER => {
            let name = field_text(node, "name", source)?;
            let mut param = Parameter::positional(name);
            param.default = field_text_single_line(node, "value", source);
            Some(param)
        }

        // x: int = 10
        node_kinds::TYPED_DEFAULT_PARAMETER => {
            let name = field_text(node, "name", source)?;
            let mut param = Parameter::positional(name);
            param.annotation = field_text_single_line(node, "type", source);
            param.default = field_text_single_line(node, "value", source);
            Some(param)
        }

        // Separators are named nodes in recent grammars, bare tokens in older ones
        node_kinds::KEYWORD_SEPARATOR | "*" => {
            Some(Parameter::separator(ParameterKind::KeywordOnlySeparator))
        }
        node_kinds::POSITIONAL_SEPARATOR | "/" => {
            Some(Parameter::separator(ParameterKind::PositionalOnlySeparator))
        }

        // (a, b) tuple parameters and anything else named: keep the text as-is
        _ if node.is_named() => Some(Parameter::positional(extract_node_text_owned(node, source))),

        // ( ) , punctuation
        _ => None,
    }
}

fn extract_splat(node: &Node, source: &str) -> Parameter {
    let kind = if node.kind() == node_kinds::DICTIONARY_SPLAT_PATTERN {
        ParameterKind::VarKeyword
    } else {
        ParameterKind::VarArgs
    };
    let name = node
        .named_child(0)
        .map(|inner| extract_node_text_owned(&inner, source))
        .unwrap_or_default();

    Parameter::positional(name).with_kind(kind)
}
