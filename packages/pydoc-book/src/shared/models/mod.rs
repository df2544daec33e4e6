//! Shared models

mod error;
mod span;

pub use error::{BookError, ErrorKind, Result};
pub use span::Span;
