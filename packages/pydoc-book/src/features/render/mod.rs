//! Render Feature
//!
//! Turns walker output into one markdown chapter.

mod chapter;
mod section;

pub use chapter::{render_chapter, render_unit};
pub use section::Section;
