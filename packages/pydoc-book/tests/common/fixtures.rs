//! Test fixtures
//!
//! [`BookFixture`] owns a temporary directory laid out as `src/` (Python
//! sources) and `book/` (mdBook source with SUMMARY.md).

use std::fs;
use std::path::{Path, PathBuf};

use pydoc_book::config::BookConfig;
use tempfile::TempDir;

pub struct BookFixture {
    _dir: TempDir,
    pub src: PathBuf,
    pub book: PathBuf,
}

impl BookFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let src = dir.path().join("src");
        let book = dir.path().join("book");
        fs::create_dir_all(&src).expect("create src");
        fs::create_dir_all(&book).expect("create book");
        Self {
            _dir: dir,
            src,
            book,
        }
    }

    /// Write a source file at `rel` under `src/`
    pub fn source(&self, rel: &str, text: &str) -> &Self {
        write_file(&self.src.join(rel), text);
        self
    }

    /// Write SUMMARY.md from `(title, path)` pairs
    pub fn summary(&self, entries: &[(&str, &str)]) -> &Self {
        let mut text = String::from("# Summary\n\n");
        for (title, path) in entries {
            text.push_str(&format!("- [{}]({})\n", title, path));
        }
        write_file(&self.book.join("SUMMARY.md"), &text);
        self
    }

    pub fn config(&self) -> BookConfig {
        BookConfig::new(&self.src, &self.book)
    }

    /// Path of a chapter under `book/`
    pub fn chapter_path(&self, rel: &str) -> PathBuf {
        self.book.join(rel)
    }

    pub fn read_chapter(&self, rel: &str) -> String {
        fs::read_to_string(self.chapter_path(rel)).expect("chapter exists")
    }

    /// Every file under `book/` except SUMMARY.md, relative and sorted
    pub fn written_chapters(&self) -> Vec<String> {
        let mut out: Vec<String> = walkdir::WalkDir::new(&self.book)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.file_name() != "SUMMARY.md")
            .map(|e| {
                e.path()
                    .strip_prefix(&self.book)
                    .expect("under book")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        out.sort();
        out
    }
}

fn write_file(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, text).expect("write fixture");
}

/// A documented top-level function
pub fn fixture_function(name: &str, doc: &str) -> String {
    format!("def {name}():\n    \"\"\"{doc}\"\"\"\n")
}

/// A documented class with documented methods taking only `self`
pub fn fixture_class(class_name: &str, doc: &str, methods: &[(&str, &str)]) -> String {
    let methods: String = methods
        .iter()
        .map(|(name, doc)| format!("\n    def {name}(self):\n        \"\"\"{doc}\"\"\"\n"))
        .collect();
    format!("class {class_name}:\n    \"\"\"{doc}\"\"\"\n{methods}")
}

/// A leading `# doc: ignore` block listing `names`
pub fn fixture_ignore_block(names: &[&str]) -> String {
    format!("# doc: ignore\n# {}\n", names.join(", "))
}

/// A realistic module exercising most rendering paths
pub fn fixture_client_module() -> String {
    r#"# doc: ignore
# Client.close, retry
"""Client module."""

import asyncio


class Client:
    """HTTP client.

    Keeps one connection pool per host.
    """

    def __init__(self, base_url: str, *, timeout: float = 5.0):
        """Not rendered on its own."""

    async def get(self, path, **params) -> Response:
        """Fetch a resource."""

    def close(self):
        """Excluded by directive."""

    @property
    def base_url(self) -> str:
        """Root URL."""

    @classmethod
    def from_env(cls, prefix=None):
        """Build from environment variables."""

    def _reset(self):
        """Private."""

    def undocumented(self):
        pass


def connect(url, retries=3):
    """Open a client."""


def retry(fn):
    """Excluded by directive."""


def _helper():
    """Private."""
"#
    .to_string()
}
