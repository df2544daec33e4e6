//! Directive Feature
//!
//! Reads `# doc:` instructions from the comment run at the top of a file.
//!
//! ```text
//! # doc: module ignore        → skip the whole file
//! # doc: ignore               → open an exclusion list
//! # Client, Client.close      → comma separated qualified names
//! # doc: end ignore           → close it (fatal without a matching open)
//! ```

mod domain;
mod scanner;

pub use domain::{Directive, ExclusionSet};
pub use scanner::{scan_directives, COMMENT_MARKER, END_IGNORE, IGNORE, MODULE_IGNORE};
