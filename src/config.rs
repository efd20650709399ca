//! YAML configuration file support.
//!
//! Both pipeline stages can be configured from a single YAML file. Every
//! section and every field is optional; anything left out takes its default.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "course essays"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: false
//!   lowercase: true
//!   strip_chars: ";,.?!_[]()*"
//!
//! compare:
//!   version: 1
//!   num_items: 10000
//!   false_positive_rate: 0.01
//!   record_matches: true
//!   perceptual:
//!     version: 1
//!     window_size: 3
//!     base: 256
//!     use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use canonical::CanonicalizeConfig;
use matcher::CompareConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files.
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

/// Top-level configuration for a detector run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectorConfig {
    /// Configuration format version.
    #[serde(default = "default_format_version")]
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Text cleaning.
    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    /// Filter sizing and window fingerprinting.
    #[serde(default)]
    pub compare: CompareConfig,
}

impl DetectorConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DetectorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the format version, then each stage.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
        self.canonical
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("canonical: {e}")))?;
        self.compare
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("compare: {e}")))?;
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
