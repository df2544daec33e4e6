//! Run configuration

use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;

pub const DEFAULT_SUMMARY_FILE: &str = "SUMMARY.md";
pub const DEFAULT_SOURCE_EXTENSION: &str = "py";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "md";

/// Everything one batch run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Root of the Python source tree
    pub source_root: PathBuf,
    /// Book directory; holds the summary and receives chapters
    pub book_dir: PathBuf,
    pub summary_file: String,
    pub source_extension: String,
    pub output_extension: String,
    /// Process files on a rayon pool
    pub parallel: bool,
    /// Pool size; `None` means 75% of the available cores
    pub jobs: Option<usize>,
    /// Render and log, but write nothing
    pub dry_run: bool,
}

impl BookConfig {
    pub fn new(source_root: impl Into<PathBuf>, book_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            book_dir: book_dir.into(),
            summary_file: DEFAULT_SUMMARY_FILE.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            parallel: false,
            jobs: None,
            dry_run: false,
        }
    }

    /// Overlay the fields a config file sets
    pub fn apply_file(mut self, file: ConfigFileV1) -> Self {
        if let Some(summary_file) = file.summary_file {
            self.summary_file = summary_file;
        }
        if let Some(ext) = file.source_extension {
            self.source_extension = ext;
        }
        if let Some(ext) = file.output_extension {
            self.output_extension = ext;
        }
        if let Some(parallel) = file.parallel {
            self.parallel = parallel;
        }
        if file.jobs.is_some() {
            self.jobs = file.jobs;
        }
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Setting a job count also turns parallel processing on
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        if jobs.is_some() {
            self.jobs = jobs;
            self.parallel = true;
        }
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn summary_path(&self) -> PathBuf {
        self.book_dir.join(&self.summary_file)
    }

    /// `<book>/<relative_dir>/<stem>.<output_extension>`
    pub fn output_path_for(&self, relative_dir: &Path, stem: &str) -> PathBuf {
        self.book_dir
            .join(relative_dir)
            .join(format!("{}.{}", stem, self.output_extension))
    }

    /// Rayon pool size for parallel runs
    pub fn effective_jobs(&self) -> usize {
        self.jobs
            .unwrap_or_else(|| std::cmp::max(1, (num_cpus::get() * 3) / 4))
    }

    /// Startup preconditions: the source root is a directory and the summary exists
    pub fn check_inputs(&self) -> ConfigResult<()> {
        if !self.source_root.exists() {
            return Err(ConfigError::MissingSourceRoot(self.source_root.clone()));
        }
        if !self.source_root.is_dir() {
            return Err(ConfigError::SourceNotDirectory(self.source_root.clone()));
        }

        let summary = self.summary_path();
        if !summary.is_file() {
            return Err(ConfigError::MissingSummary {
                file_name: self.summary_file.clone(),
                path: summary,
            });
        }
        Ok(())
    }
}
