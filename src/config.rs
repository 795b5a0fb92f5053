//! YAML configuration file support.
//!
//! Deployments describe the whole engine (embedding backend and match
//! policy) in a single YAML file loaded once at process start. Nothing here
//! is re-read per request; tuning a weight or the threshold means reloading
//! the process with a new file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "production"
//!
//! embed:
//!   mode: "api"
//!   model_name: "bge-small-en-v1.5"
//!   dimension: 384
//!   api_url: "https://router.huggingface.co/hf-inference/models/BAAI/bge-small-en-v1.5/pipeline/feature-extraction"
//!   api_timeout_secs: 30
//!   normalize: true
//!
//! matcher:
//!   min_score: 0.2
//!   explain: true
//!   weights:
//!     semantic: 0.40
//!     complementarity: 0.25
//!     experience: 0.20
//!     diversity: 0.15
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use embed::EmbedConfig;
use matcher::MatchConfig;

/// Errors that can occur when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the match engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSyncConfig {
    /// Configuration format version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Skill vectorizer configuration.
    #[serde(default)]
    pub embed: EmbedConfig,

    /// Match engine configuration.
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl SkillSyncConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SkillSyncConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
        self.embed
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        Ok(())
    }
}

impl Default for SkillSyncConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            embed: EmbedConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
embed:
  mode: "hash"
  dimension: 128
matcher:
  min_score: 0.3
  explain: false
"#;

        let config = SkillSyncConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.embed.mode, "hash");
        assert_eq!(config.embed.dimension, 128);
        assert!((config.matcher.min_score - 0.3).abs() < 1e-6);
        assert!(!config.matcher.explain);
    }

    #[test]
    fn load_from_file() {
        let yaml = r#"
version: "1.0"
embed:
  mode: "hash"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = SkillSyncConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = SkillSyncConfig::from_yaml("version: \"1.0\"").unwrap();
        assert_eq!(config.embed.mode, "hash");
        assert!((config.matcher.min_score - 0.2).abs() < 1e-6);
        assert!((config.matcher.weights.semantic - 0.40).abs() < 1e-6);
    }

    #[test]
    fn unsupported_version_rejected() {
        let result = SkillSyncConfig::from_yaml("version: \"2.0\"");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn invalid_embed_mode_rejected() {
        let yaml = r#"
version: "1.0"
embed:
  mode: "onnx"
"#;
        let result = SkillSyncConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("mode"));
    }

    #[test]
    fn invalid_weights_rejected() {
        let yaml = r#"
version: "1.0"
matcher:
  weights:
    semantic: 0.9
    complementarity: 0.9
    experience: 0.1
    diversity: 0.1
"#;
        let result = SkillSyncConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("sum to 1.0"));
    }

    #[test]
    fn full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"

embed:
  mode: "api"
  model_name: "bge-small-en-v1.5"
  dimension: 384
  api_url: "https://embeddings.internal/feature-extraction"
  api_timeout_secs: 10
  normalize: true
  cache_capacity: 512

matcher:
  min_score: 0.25
  explain: true
  max_results: 20
  parallel: true
  weights:
    semantic: 0.40
    complementarity: 0.25
    experience: 0.20
    diversity: 0.15
"#;

        let config = SkillSyncConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("production".into()));
        assert_eq!(config.embed.mode, "api");
        assert_eq!(
            config.embed.api_url.as_deref(),
            Some("https://embeddings.internal/feature-extraction")
        );
        assert_eq!(config.embed.cache_capacity, 512);
        assert_eq!(config.matcher.max_results, Some(20));
        assert!(config.matcher.parallel);
    }
}
