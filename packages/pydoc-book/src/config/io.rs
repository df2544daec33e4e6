//! Configuration I/O (YAML loading)

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// Every field but `version` is optional; unset fields keep the value from the
/// layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Manifest file name inside the book directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<String>,

    /// Extension of source files to scan, without the dot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_extension: Option<String>,

    /// Extension of written chapters, without the dot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_extension: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl ConfigFileV1 {
    /// Parse and version-check YAML text
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(yaml)?;
        match file.version {
            None => Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => Err(ConfigError::UnsupportedVersion {
                found: v,
                supported: SUPPORTED_VERSIONS.to_vec(),
            }),
            Some(_) => Ok(file),
        }
    }

    /// Read and parse a YAML config file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
summary_file: TOC.md
output_extension: markdown
parallel: true
jobs: 2
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let file = ConfigFileV1::from_yaml(temp_file.path()).unwrap();
        assert_eq!(file.summary_file.as_deref(), Some("TOC.md"));
        assert_eq!(file.output_extension.as_deref(), Some("markdown"));
        assert_eq!(file.source_extension, None);
        assert_eq!(file.parallel, Some(true));
        assert_eq!(file.jobs, Some(2));
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = ConfigFileV1::from_yaml_str("parallel: true\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = ConfigFileV1::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field_is_rejected() {
        let result = ConfigFileV1::from_yaml_str("version: 1\ntheme: dark\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_set_fields_only() {
        let file = ConfigFileV1 {
            version: Some(1),
            jobs: Some(8),
            ..Default::default()
        };
        let yaml = file.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("jobs: 8"));
        assert!(!yaml.contains("parallel"));
    }
}
