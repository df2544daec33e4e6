//! Source discovery
//!
//! Walks the source root in file-name order. Entries whose name starts with
//! `_` are pruned, directories included, so `_vendor/` and `__init__.py`
//! never reach the processor.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::BookConfig;
use crate::features::walker::is_private;
use crate::shared::models::{BookError, Result};

/// A source file found under the root, not yet read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    /// Parent directory relative to the source root (empty at top level)
    pub relative_dir: PathBuf,
    /// File name without extension
    pub stem: String,
}

impl SourceEntry {
    fn from_entry(entry: &DirEntry, root: &Path) -> Option<Self> {
        let path = entry.path().to_path_buf();
        let stem = path.file_stem()?.to_string_lossy().into_owned();
        let relative_dir = path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Some(Self {
            path,
            relative_dir,
            stem,
        })
    }

    /// Read the file as UTF-8
    pub fn load(self) -> Result<SourceFile> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| BookError::io_at(&self.path, e))?;
        Ok(SourceFile { entry: self, text })
    }
}

/// A source file with its text
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub entry: SourceEntry,
    pub text: String,
}

impl SourceFile {
    /// In-memory source, for callers that already hold the text
    pub fn new(
        path: impl Into<PathBuf>,
        relative_dir: impl Into<PathBuf>,
        stem: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            entry: SourceEntry {
                path: path.into(),
                relative_dir: relative_dir.into(),
                stem: stem.into(),
            },
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.entry.path
    }
}

fn is_visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_private(&entry.file_name().to_string_lossy())
}

/// All source files under `config.source_root`, sorted by path
pub fn discover_sources(config: &BookConfig) -> Result<Vec<SourceEntry>> {
    let root = &config.source_root;
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_visible)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let matches_extension = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == config.source_extension.as_str());
        if !matches_extension {
            continue;
        }

        if let Some(file) = SourceEntry::from_entry(&entry, root) {
            files.push(file);
        }
    }

    Ok(files)
}
