//! Leading comment scanner
//!
//! State machine over the comment run at the top of a file. The run ends at
//! the first line break not followed by `#`, or at end of input. Every read is
//! guarded by `pos < text.len()`.
//!
//! Only text after `# doc: ignore` is collected; comments above it (license
//! headers, shebang notes) are never read as names.

use std::path::Path;

use tracing::trace;

use super::domain::{Directive, ExclusionSet};
use crate::shared::models::{BookError, Result};

pub const COMMENT_MARKER: char = '#';
pub const MODULE_IGNORE: &str = "# doc: module ignore";
pub const IGNORE: &str = "# doc: ignore";
pub const END_IGNORE: &str = "# doc: end ignore";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Comment text before any `# doc: ignore`; not collected
    Preamble,
    /// Inside an open ignore scope; text is collected
    Collecting,
}

/// Scan `text` for `# doc:` directives.
///
/// `file` is only used to locate the error for an unmatched `end ignore`.
pub fn scan_directives(text: &str, file: &Path) -> Result<Directive> {
    if !text.starts_with(COMMENT_MARKER) {
        return Ok(Directive::none());
    }

    let mut state = ScanState::Preamble;
    let mut buffer = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if rest.starts_with('\n') {
            let next = pos + 1;
            if next >= text.len() || !text[next..].starts_with(COMMENT_MARKER) {
                break;
            }
        }

        if rest.starts_with(MODULE_IGNORE) {
            return Ok(Directive::SkipFile);
        }

        if rest.starts_with(IGNORE) {
            state = ScanState::Collecting;
            pos += IGNORE.len();
            continue;
        }

        if rest.starts_with(END_IGNORE) {
            if state != ScanState::Collecting {
                return Err(BookError::directive(format!(
                    "'{}' without '{}'",
                    END_IGNORE, IGNORE
                ))
                .with_file(file)
                .with_line(line_of(text, pos)));
            }
            break;
        }

        // `rest` is non-empty here, so there is always a next char
        let Some(c) = rest.chars().next() else {
            break;
        };
        if state == ScanState::Collecting {
            buffer.push(c);
        }
        pos += c.len_utf8();
    }

    let exclusions = parse_exclusions(&buffer);
    if !exclusions.is_empty() {
        trace!(file = %file.display(), names = ?exclusions.sorted(), "doc exclusions");
    }
    Ok(Directive::Exclude(exclusions))
}

/// Strip comment markers, split on commas, trim, drop empties
fn parse_exclusions(buffer: &str) -> ExclusionSet {
    let stripped = buffer.replace(COMMENT_MARKER, "");
    stripped
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// 1-based line number of byte offset `pos`
fn line_of(text: &str, pos: usize) -> u32 {
    text.get(..pos)
        .map(|head| head.matches('\n').count() as u32 + 1)
        .unwrap_or(1)
}
