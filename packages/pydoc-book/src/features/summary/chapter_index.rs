//! Chapter index built from SUMMARY.md
//!
//! A deliberately small parser: only list items of the form
//! `- [Title](relative/path.md)` mean anything. Headings, prose and separators
//! are ignored, and an empty link target `()` is skipped.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::shared::models::{BookError, Result};
use crate::shared::utils::normalize_path;

/// One `- [Title](path)` entry, with the path resolved against the book dir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub title: String,
    pub output_path: PathBuf,
}

/// Parse SUMMARY.md content into entries, in file order
pub fn parse_summary(content: &str, book_dir: &Path) -> Vec<ChapterEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("- [") && line.ends_with(')'))
        .filter(|line| !line.ends_with("()"))
        .filter_map(|line| {
            let inner = &line[3..line.len() - 1];
            let (title, target) = inner.split_once("](")?;
            Some(ChapterEntry {
                title: title.to_string(),
                output_path: normalize_path(&book_dir.join(target)),
            })
        })
        .collect()
}

/// Immutable title lookup keyed by normalized output path.
///
/// When two entries resolve to the same path the first one wins; the later
/// entry stays visible through [`ChapterIndex::entries`] only.
#[derive(Debug, Clone, Default)]
pub struct ChapterIndex {
    entries: Vec<ChapterEntry>,
    by_path: FxHashMap<PathBuf, usize>,
}

impl ChapterIndex {
    pub fn new(entries: Vec<ChapterEntry>) -> Self {
        let mut by_path = FxHashMap::default();

        for (idx, entry) in entries.iter().enumerate() {
            if let Some(&first) = by_path.get(&entry.output_path) {
                let first: &ChapterEntry = &entries[first];
                warn!(
                    path = %entry.output_path.display(),
                    kept = %first.title,
                    ignored = %entry.title,
                    "duplicate chapter path in summary, first entry wins"
                );
                continue;
            }
            by_path.insert(entry.output_path.clone(), idx);
        }

        Self { entries, by_path }
    }

    /// Parse summary text that lives in `book_dir`
    pub fn from_summary(content: &str, book_dir: &Path) -> Self {
        Self::new(parse_summary(content, book_dir))
    }

    /// Read and parse the summary file at `summary_path`
    pub fn load(summary_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(summary_path).map_err(|e| {
            BookError::manifest(format!("Failed to read summary: {}", e))
                .with_file(summary_path)
                .with_source(e)
        })?;
        let book_dir = summary_path.parent().unwrap_or_else(|| Path::new("."));

        let index = Self::from_summary(&content, book_dir);
        debug!(
            summary = %summary_path.display(),
            chapters = index.len(),
            "loaded chapter index"
        );
        Ok(index)
    }

    /// Title of the chapter written to `output_path`, if the summary lists it
    pub fn title_for(&self, output_path: &Path) -> Option<&str> {
        let key = normalize_path(output_path);
        self.by_path
            .get(&key)
            .map(|&idx| self.entries[idx].title.as_str())
    }

    /// All parsed entries, duplicates included
    pub fn entries(&self) -> &[ChapterEntry] {
        &self.entries
    }

    /// Number of distinct chapter paths
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SUMMARY: &str = r#"
# Summary

[Introduction](README.md)

# API

- [Getting Started](getting_started.md)
- [Draft]()
  - [Client](api/client.md)
    - [Pool](./api/pool.md)

Some prose that mentions - [links](inline.md) mid-line.
"#;

    #[test]
    fn test_parse_summary_entries() {
        let entries = parse_summary(SUMMARY, Path::new("/book"));

        assert_eq!(
            entries,
            vec![
                ChapterEntry {
                    title: "Getting Started".to_string(),
                    output_path: PathBuf::from("/book/getting_started.md"),
                },
                ChapterEntry {
                    title: "Client".to_string(),
                    output_path: PathBuf::from("/book/api/client.md"),
                },
                ChapterEntry {
                    title: "Pool".to_string(),
                    output_path: PathBuf::from("/book/api/pool.md"),
                },
            ]
        );
    }

    #[test]
    fn test_title_lookup() {
        let index = ChapterIndex::from_summary(SUMMARY, Path::new("/book"));

        assert_eq!(
            index.title_for(Path::new("/book/getting_started.md")),
            Some("Getting Started")
        );
        assert_eq!(index.title_for(Path::new("/book/api/../api/pool.md")), Some("Pool"));
        assert_eq!(index.title_for(Path::new("/book/README.md")), None);
        assert_eq!(index.title_for(Path::new("/book/inline.md")), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_duplicate_paths_first_entry_wins() {
        let summary = "- [First](api/mod.md)\n- [Second](./api/mod.md)\n";
        let index = ChapterIndex::from_summary(summary, Path::new("/book"));

        assert_eq!(index.title_for(Path::new("/book/api/mod.md")), Some("First"));
        assert_eq!(index.entries().len(), 2);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_title_may_contain_brackets_and_parens() {
        let entries = parse_summary("- [Types (core)](types.md)", Path::new("/b"));
        assert_eq!(entries[0].title, "Types (core)");
        assert_eq!(entries[0].output_path, PathBuf::from("/b/types.md"));
    }

    #[test]
    fn test_load_missing_summary_is_manifest_error() {
        let err = ChapterIndex::load(Path::new("/definitely/not/here/SUMMARY.md")).unwrap_err();
        assert_eq!(err.kind, crate::shared::models::ErrorKind::Manifest);
    }
}
