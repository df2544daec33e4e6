//! Summary Feature
//!
//! Loads the book's `SUMMARY.md` into a [`ChapterIndex`]: the set of chapter
//! files this run is allowed to produce, and the title each one gets.

mod chapter_index;

pub use chapter_index::{parse_summary, ChapterEntry, ChapterIndex};
