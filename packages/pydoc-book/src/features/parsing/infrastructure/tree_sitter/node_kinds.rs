//! Python node kinds used by the extractors

pub const BLOCK: &str = "block";
pub const FUNCTION_DEF: &str = "function_definition";
pub const CLASS_DEF: &str = "class_definition";
pub const DECORATED_DEF: &str = "decorated_definition";
pub const DECORATOR: &str = "decorator";
pub const EXPRESSION_STATEMENT: &str = "expression_statement";
pub const STRING: &str = "string";
pub const CONCATENATED_STRING: &str = "concatenated_string";
pub const IDENTIFIER: &str = "identifier";
pub const ASYNC: &str = "async";

// Parameter list entries
pub const PARAMETERS: &str = "parameters";
pub const TYPED_PARAMETER: &str = "typed_parameter";
pub const DEFAULT_PARAMETER: &str = "default_parameter";
pub const TYPED_DEFAULT_PARAMETER: &str = "typed_default_parameter";
pub const LIST_SPLAT_PATTERN: &str = "list_splat_pattern";
pub const DICTIONARY_SPLAT_PATTERN: &str = "dictionary_splat_pattern";
pub const KEYWORD_SEPARATOR: &str = "keyword_separator";
pub const POSITIONAL_SEPARATOR: &str = "positional_separator";

/// Check if a node kind is a definition the walker can document
pub fn is_definition(kind: &str) -> bool {
    matches!(kind, FUNCTION_DEF | CLASS_DEF | DECORATED_DEF)
}
