//! Pipeline orchestration
//!
//! - `discovery`: find source files under the root
//! - `processor`: one file → one outcome (pure, no I/O)
//! - `batch`: render every file, then write the chapters

pub mod batch;
pub mod discovery;
pub mod processor;

pub use batch::{build_book, render_all, run_batch, write_chapters, BatchReport};
pub use discovery::{discover_sources, SourceEntry, SourceFile};
pub use processor::{process_source, process_source_with, FileOutcome, RenderedChapter};
