/*
 * Docstring Extraction
 *
 * A docstring is the first statement of a body when that statement is a bare
 * string literal (or implicit concatenation of string literals). Byte and
 * f-strings are not docstrings.
 *
 * The literal is decoded (prefix, quotes, escape sequences) and then cleaned
 * the way `inspect.cleandoc` does: tabs expanded, common indentation removed,
 * leading/trailing blank lines dropped.
 */

use tree_sitter::Node;

use crate::features::parsing::infrastructure::tree_sitter::node_kinds;
use crate::shared::utils::tree_sitter::{extract_node_text, named_children};

const TAB_SIZE: usize = 8;

/// Extract docstring from a block node (first statement only)
pub fn extract_docstring(block: &Node, source: &str) -> Option<String> {
    if block.kind() != node_kinds::BLOCK {
        return None;
    }

    let first = named_children(block).into_iter().next()?;
    if first.kind() != node_kinds::EXPRESSION_STATEMENT || first.named_child_count() != 1 {
        return None;
    }

    let expr = first.named_child(0)?;
    let raw = match expr.kind() {
        node_kinds::STRING => decode_string_literal(extract_node_text(&expr, source))?,
        node_kinds::CONCATENATED_STRING => {
            let mut joined = String::new();
            for part in named_children(&expr) {
                joined.push_str(&decode_string_literal(extract_node_text(&part, source))?);
            }
            joined
        }
        _ => return None,
    };

    Some(clean_docstring(&raw))
}

/// Decode one Python string literal (with prefix and quotes) into its value.
///
/// Returns `None` for byte strings, f-strings and malformed literals.
pub fn decode_string_literal(literal: &str) -> Option<String> {
    let quote_start = literal.find(|c| c == '"' || c == '\'')?;
    let prefix = literal[..quote_start].to_ascii_lowercase();
    if prefix.contains('b') || prefix.contains('f') {
        return None;
    }
    let raw = prefix.contains('r');

    let body = &literal[quote_start..];
    let quote = ["\"\"\"", "'''", "\"", "'"]
        .into_iter()
        .find(|q| body.starts_with(q) && body.len() >= 2 * q.len() && body.ends_with(q))?;
    let inner = &body[quote.len()..body.len() - quote.len()];

    Some(if raw {
        inner.to_string()
    } else {
        unescape(inner)
    })
}

/// Resolve backslash escapes the way the Python tokenizer does for `str` literals
fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };

        match next {
            '\n' => {} // line continuation
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(&d) if ('0'..='7').contains(&d) => {
                            digits.push(d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let decoded = (digits.len() == width && digits.chars().all(|d| d.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            }
            // \N{NAME} and unknown escapes are kept verbatim
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

/// Clean up indentation the way `inspect.cleandoc` does
pub fn clean_docstring(doc: &str) -> String {
    let lines: Vec<String> = doc.split('\n').map(expand_tabs).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min();

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let line = if i == 0 {
            line.trim_start().to_string()
        } else if line.trim().is_empty() {
            String::new()
        } else {
            match margin {
                Some(margin) => line.get(margin..).unwrap_or(line.trim_start()).to_string(),
                None => line.clone(),
            }
        };
        cleaned.push(line.trim_end().to_string());
    }

    while cleaned.last().is_some_and(|line| line.is_empty()) {
        cleaned.pop();
    }
    let first_content = cleaned
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(cleaned.len());

    cleaned[first_content..].join("\n")
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_SIZE - (column % TAB_SIZE);
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
