// File: src/config.rs
// Purpose: Validator behaviour configuration, parsed from TOML

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Which session operations run the evaluator.
///
/// Submit always validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Change, blur and submit
    #[default]
    All,
    /// Change and submit
    OnChange,
    /// Blur and submit
    OnBlur,
    /// Submit only
    OnSubmit,
}

impl ValidationMode {
    pub fn validates_on_change(self) -> bool {
        matches!(self, ValidationMode::All | ValidationMode::OnChange)
    }

    pub fn validates_on_blur(self) -> bool {
        matches!(self, ValidationMode::All | ValidationMode::OnBlur)
    }
}

/// Session behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub mode: ValidationMode,

    /// Re-evaluate fields that confirm a changed field, if they were
    /// already validated once
    #[serde(default = "default_false")]
    pub revalidate_dependents: bool,
}

fn default_false() -> bool {
    false
}

impl ValidatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing or blank file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read validator config: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse validator config: {:?}", path))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidatorError;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.mode, ValidationMode::All);
        assert!(!config.revalidate_dependents);
        assert!(config.mode.validates_on_change());
        assert!(config.mode.validates_on_blur());
    }

    #[test]
    fn test_empty_config() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_custom_mode() {
        let toml = r#"
            mode = "on_blur"
            revalidate_dependents = true
        "#;
        let config = ValidatorConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.mode, ValidationMode::OnBlur);
        assert!(!config.mode.validates_on_change());
        assert!(config.mode.validates_on_blur());
        assert!(config.revalidate_dependents);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = ValidatorConfig::from_toml_str(r#"mode = "sometimes""#).unwrap_err();
        assert!(matches!(err, ValidatorError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"mode = "on_submit""#).unwrap();

        let config = ValidatorConfig::load(file.path()).unwrap();
        assert_eq!(config.mode, ValidationMode::OnSubmit);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidatorConfig::load(dir.path().join("validator.toml")).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }
}
