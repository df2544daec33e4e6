//! Per-file processing
//!
//! chapter lookup → directives → declaration model → doc units → chapter
//!
//! Files the summary does not list are never scanned, so their comment
//! blocks cannot abort the run.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::discovery::SourceFile;
use crate::config::BookConfig;
use crate::features::directives::{scan_directives, Directive, ExclusionSet};
use crate::features::parsing::{Parser, TreeSitterParser};
use crate::features::render::render_chapter;
use crate::features::summary::ChapterIndex;
use crate::features::walker::walk_module;
use crate::shared::models::Result;

/// A chapter ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChapter {
    pub source: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
    pub content: String,
}

/// What happened to one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// `# doc: module ignore`
    Skipped { source: PathBuf },
    /// No summary entry for the resolved output path
    NotInSummary {
        source: PathBuf,
        output_path: PathBuf,
    },
    Rendered(RenderedChapter),
}

impl FileOutcome {
    pub fn rendered(&self) -> Option<&RenderedChapter> {
        match self {
            FileOutcome::Rendered(chapter) => Some(chapter),
            _ => None,
        }
    }
}

/// Process one file with the tree-sitter Python parser
pub fn process_source(
    source: &SourceFile,
    index: &ChapterIndex,
    config: &BookConfig,
) -> Result<FileOutcome> {
    process_source_with(&TreeSitterParser::python(), source, index, config)
}

/// Process one file with an explicit parser
pub fn process_source_with<P: Parser + ?Sized>(
    parser: &P,
    source: &SourceFile,
    index: &ChapterIndex,
    config: &BookConfig,
) -> Result<FileOutcome> {
    let path = source.path();

    let output_path = config.output_path_for(&source.entry.relative_dir, &source.entry.stem);
    let Some(title) = index.title_for(&output_path) else {
        debug!(
            file = %path.display(),
            output = %output_path.display(),
            "not listed in summary"
        );
        return Ok(FileOutcome::NotInSummary {
            source: path.to_path_buf(),
            output_path,
        });
    };

    let exclusions = match scan_directives(&source.text, path)? {
        Directive::SkipFile => {
            info!(file = %path.display(), "ignoring file");
            return Ok(FileOutcome::Skipped {
                source: path.to_path_buf(),
            });
        }
        Directive::Exclude(set) => set,
    };

    let content = render_source(parser, source, title, &exclusions)?;

    Ok(FileOutcome::Rendered(RenderedChapter {
        source: path.to_path_buf(),
        output_path,
        title: title.to_string(),
        content,
    }))
}

fn render_source<P: Parser + ?Sized>(
    parser: &P,
    source: &SourceFile,
    title: &str,
    exclusions: &ExclusionSet,
) -> Result<String> {
    let file_path = source.path().display().to_string();
    let parsed = parser.parse(&source.text, &file_path)?;

    if parsed.has_errors {
        let first_line = parsed.errors.first().map(|e| e.span.start_line);
        warn!(
            file = %file_path,
            errors = parsed.errors.len(),
            line = ?first_line,
            "syntax errors in source, rendering what parsed"
        );
    }

    let units = walk_module(&parsed.module, exclusions);
    debug!(file = %file_path, units = units.len(), "walked module");

    Ok(render_chapter(title, &units))
}
