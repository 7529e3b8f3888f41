//! Compiler settings, loadable from a TOML file

use crate::DEFAULT_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

// Main config structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    // result count when the utterance names none
    pub default_size: u64,

    // field the free-text search terms are matched against
    pub text_field: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            text_field: "_all".to_string(),
        }
    }
}

impl CompilerConfig {
    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CompilerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_size == 0 {
            return Err(ConfigError::Invalid("default_size must be positive".to_string()));
        }
        if self.text_field.trim().is_empty() {
            return Err(ConfigError::Invalid("text_field must not be empty".to_string()));
        }
        Ok(())
    }
}

// Load configuration from a TOML file

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CompilerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    CompilerConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let toml_content = r#"
default_size = 200
text_field = "message"
"#;
        let config = CompilerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_size, 200);
        assert_eq!(config.text_field, "message");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = CompilerConfig::from_toml_str("text_field = \"message\"").unwrap();
        assert_eq!(config.default_size, 50);

        let config = CompilerConfig::from_toml_str("").unwrap();
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn test_rejects_zero_size() {
        let result = CompilerConfig::from_toml_str("default_size = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let result = CompilerConfig::from_toml_str("default_size = \"many\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/definitely/not/here/nlq.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
