//! Batch orchestration
//!
//! Two phases:
//! 1. Render: every discovered file becomes a [`FileOutcome`], sequentially
//!    or on a rayon pool. Nothing touches the book directory yet.
//! 2. Write: only if every file succeeded, chapters are written in sorted
//!    output-path order.
//!
//! A fatal error in phase 1 leaves the book untouched.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::discovery::{discover_sources, SourceEntry};
use super::processor::{process_source_with, FileOutcome, RenderedChapter};
use crate::config::{BookConfig, Validatable};
use crate::features::parsing::{Parser, TreeSitterParser};
use crate::features::summary::ChapterIndex;
use crate::shared::models::{BookError, Result};

/// Counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub discovered: usize,
    /// Chapters written (or that would be written on a dry run), sorted
    pub written: Vec<PathBuf>,
    pub skipped: usize,
    pub not_in_summary: usize,
    pub dry_run: bool,
}

impl BatchReport {
    fn from_outcomes(discovered: usize, outcomes: &[FileOutcome], dry_run: bool) -> Self {
        let mut report = BatchReport {
            discovered,
            dry_run,
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Skipped { .. } => report.skipped += 1,
                FileOutcome::NotInSummary { .. } => report.not_in_summary += 1,
                FileOutcome::Rendered(chapter) => report.written.push(chapter.output_path.clone()),
            }
        }
        report.written.sort();
        report
    }
}

/// Validate the config, check inputs, load the summary and run the batch
pub fn build_book(config: &BookConfig) -> Result<BatchReport> {
    config.validate()?;
    config.check_inputs()?;

    let index = ChapterIndex::load(&config.summary_path())?;
    run_batch(config, &index)
}

/// Render every source file, then write the chapters
pub fn run_batch(config: &BookConfig, index: &ChapterIndex) -> Result<BatchReport> {
    let entries = discover_sources(config)?;
    let discovered = entries.len();
    info!(
        root = %config.source_root.display(),
        files = discovered,
        parallel = config.parallel,
        "discovered source files"
    );

    let outcomes = render_all(entries, index, config)?;
    let report = BatchReport::from_outcomes(discovered, &outcomes, config.dry_run);

    let chapters: Vec<RenderedChapter> = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            FileOutcome::Rendered(chapter) => Some(chapter),
            _ => None,
        })
        .collect();

    if config.dry_run {
        for chapter in &chapters {
            info!(output = %chapter.output_path.display(), "dry run, not writing");
        }
    } else {
        write_chapters(chapters)?;
    }

    info!(
        written = report.written.len(),
        skipped = report.skipped,
        not_in_summary = report.not_in_summary,
        dry_run = report.dry_run,
        "book generation finished"
    );
    Ok(report)
}

/// Load and process every entry.
///
/// Outcomes keep the order of `entries`. On failure the error of the first
/// failing entry in that order is returned, whichever thread hit it first.
pub fn render_all(
    entries: Vec<SourceEntry>,
    index: &ChapterIndex,
    config: &BookConfig,
) -> Result<Vec<FileOutcome>> {
    let parser = TreeSitterParser::python();
    if !parser.supports_extension(&config.source_extension) {
        warn!(
            extension = %config.source_extension,
            language = parser.language_name(),
            "unexpected source extension for parser, parsing anyway"
        );
    }

    let process = |entry: SourceEntry| -> Result<FileOutcome> {
        let source = entry.load()?;
        process_source_with(&parser, &source, index, config)
    };

    let results: Vec<Result<FileOutcome>> = if config.parallel {
        let jobs = config.effective_jobs();
        debug!(jobs, "rendering on rayon pool");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| {
                BookError::internal(format!("Failed to build thread pool: {}", e)).with_source(e)
            })?;
        pool.install(|| entries.into_par_iter().map(process).collect())
    } else {
        entries.into_iter().map(process).collect()
    };

    results.into_iter().collect()
}

/// Write chapters in sorted output-path order, creating directories as needed
pub fn write_chapters(mut chapters: Vec<RenderedChapter>) -> Result<()> {
    chapters.sort_by(|a, b| a.output_path.cmp(&b.output_path));

    for chapter in &chapters {
        if let Some(parent) = chapter.output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BookError::io_at(parent, e))?;
        }
        std::fs::write(&chapter.output_path, &chapter.content)
            .map_err(|e| BookError::io_at(&chapter.output_path, e))?;
        debug!(
            source = %chapter.source.display(),
            output = %chapter.output_path.display(),
            "wrote chapter"
        );
    }
    Ok(())
}
