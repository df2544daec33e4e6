/*
 * pydoc-book - Python docstrings to mdBook chapters
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (BookError, Span) and tree-sitter helpers
 * - features/    : Vertical slices (directives, parsing, signature, walker, summary, render)
 * - config/      : Layered configuration (defaults → YAML → CLI)
 * - pipeline/    : Discovery and batch orchestration
 *
 * Flow per file:
 *   text → directives → tree-sitter → doc units → markdown chapter
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Pipeline orchestration
pub mod pipeline;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{BookConfig, ConfigError, ConfigFileV1, Validatable};
pub use features::summary::ChapterIndex;
pub use pipeline::{build_book, process_source, run_batch, BatchReport, FileOutcome, SourceFile};
pub use shared::models::{BookError, ErrorKind, Result};
