//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

use crate::shared::models::BookError;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source root missing
    #[error("src directory does not exist!")]
    MissingSourceRoot(PathBuf),

    /// Source root exists but is a file
    #[error("src is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    /// Summary manifest missing from the book directory
    #[error("{file_name} does not exist! Aborting...")]
    MissingSummary { file_name: String, path: PathBuf },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Invalid field value
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for BookError {
    fn from(err: ConfigError) -> Self {
        BookError::config(err.to_string()).with_source(err)
    }
}
