//! Configuration System
//!
//! Three layers, later ones win:
//! - Defaults (`BookConfig::new`)
//! - Versioned YAML file (`--config book.yaml`)
//! - Command-line flags
//!
//! # Examples
//!
//! ```rust,ignore
//! use pydoc_book::config::{BookConfig, ConfigFileV1};
//!
//! let file = ConfigFileV1::from_yaml("pydoc-book.yaml")?;
//! let config = BookConfig::new("src", "book").apply_file(file).jobs(Some(4));
//! config.validate()?;
//! ```

pub mod book_config;
pub mod error;
pub mod io;
pub mod validation;

// Re-exports
pub use book_config::BookConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, SUPPORTED_VERSIONS};
pub use validation::Validatable;
