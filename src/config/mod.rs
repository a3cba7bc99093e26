#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const SOURCE_PATH: &str = "source_path";
pub const DESTINATION_PATH: &str = "destination_path";

/// The two paths a run needs. Other keys are not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source_path: String,
    pub destination_path: String,
}

/// Partially specified configuration, before required keys are checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PartialConfig {
    pub source_path: Option<String>,
    pub destination_path: Option<String>,
}

impl PartialConfig {
    pub(crate) fn into_config(self) -> Result<PipelineConfig> {
        let source_path = validate_required_field(SOURCE_PATH, &self.source_path)?;
        let destination_path = validate_required_field(DESTINATION_PATH, &self.destination_path)?;
        Ok(PipelineConfig::new(source_path, destination_path))
    }
}

impl PipelineConfig {
    pub fn new(source_path: impl Into<String>, destination_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
        }
    }

    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        for key in map.keys() {
            if key != SOURCE_PATH && key != DESTINATION_PATH {
                tracing::warn!("Ignoring unrecognized configuration key: {}", key);
            }
        }

        PartialConfig {
            source_path: map.get(SOURCE_PATH).cloned(),
            destination_path: map.get(DESTINATION_PATH).cloned(),
        }
        .into_config()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::partial_from_file(path)?.into_config()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::partial_from_toml_str(content)?.into_config()
    }

    pub(crate) fn partial_from_file<P: AsRef<Path>>(path: P) -> Result<PartialConfig> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::partial_from_toml_str(&content)
    }

    pub(crate) fn partial_from_toml_str(content: &str) -> Result<PartialConfig> {
        toml::from_str(content).map_err(|e| EtlError::config(format!("TOML parsing error: {}", e)))
    }
}

impl ConfigProvider for PipelineConfig {
    fn source_path(&self) -> &str {
        &self.source_path
    }

    fn destination_path(&self) -> &str {
        &self.destination_path
    }
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<()> {
        validate_path(SOURCE_PATH, &self.source_path)?;
        validate_path(DESTINATION_PATH, &self.destination_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_map() {
        let config = PipelineConfig::from_map(&map(&[
            ("source_path", "in.csv"),
            ("destination_path", "out.csv"),
            ("delimiter", ";"),
        ]))
        .unwrap();

        assert_eq!(config, PipelineConfig::new("in.csv", "out.csv"));
    }

    #[test]
    fn test_from_map_missing_key() {
        let err = PipelineConfig::from_map(&map(&[("source_path", "in.csv")])).unwrap_err();
        assert!(matches!(err, EtlError::MissingConfigError { field } if field == "destination_path"));
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
source_path = "data/sample_input.csv"
destination_path = "data/output.csv"
"#;

        let config = PipelineConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source_path(), "data/sample_input.csv");
        assert_eq!(config.destination_path(), "data/output.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PipelineConfig::from_toml_str("source_path = ").unwrap_err();
        assert!(matches!(err, EtlError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = PipelineConfig::new("in.csv", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"source_path = \"a.csv\"\ndestination_path = \"b.csv\"\n")
            .unwrap();

        let config = PipelineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config, PipelineConfig::new("a.csv", "b.csv"));
    }
}
