//! Configuration validation

use super::book_config::BookConfig;
use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}

fn validate_extension(field: &str, ext: &str) -> ConfigResult<()> {
    if ext.is_empty() {
        return Err(ConfigError::validation(field, "must not be empty"));
    }
    if ext.contains('.') || ext.contains(std::path::is_separator) {
        return Err(ConfigError::validation(
            field,
            format!("'{}' must be a bare extension such as 'md'", ext),
        ));
    }
    Ok(())
}

impl Validatable for BookConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.summary_file.trim().is_empty() {
            return Err(ConfigError::validation("summary_file", "must not be empty"));
        }
        validate_extension("source_extension", &self.source_extension)?;
        validate_extension("output_extension", &self.output_extension)?;
        if self.jobs == Some(0) {
            return Err(ConfigError::validation("jobs", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BookConfig::new("src", "book").validate().is_ok());
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let mut config = BookConfig::new("src", "book");
        config.output_extension = ".md".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output_extension"));
    }

    #[test]
    fn test_rejects_zero_jobs() {
        let config = BookConfig::new("src", "book").jobs(Some(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "jobs"
        ));
    }

    #[test]
    fn test_rejects_empty_summary_file() {
        let mut config = BookConfig::new("src", "book");
        config.summary_file = " ".to_string();
        assert!(config.validate().is_err());
    }
}
