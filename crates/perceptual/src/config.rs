//! Configuration and error types for window fingerprinting.
//!
//! The fingerprinting layer is a pure function of `(tokens, config)`: no I/O,
//! no clocks, no environment lookups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_BASE, HASH_MOD};

/// Configuration for turning a token stream into window fingerprints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerceptualConfig {
    /// Configuration schema version.
    ///
    /// Any change that can affect fingerprints must bump this so old scores
    /// stay reproducible.
    pub version: u32,
    /// Number of consecutive tokens per window.
    pub window_size: usize,
    /// Polynomial multiplier for the rolling hash.
    pub base: u64,
    /// Compute window fingerprints on the rayon pool.
    ///
    /// Output is identical to the sequential path; only wall-clock changes.
    pub use_parallel: bool,
}

impl PerceptualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size in tokens. Typical values: 2-8.
    /// Larger windows flag only longer shared runs.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the rolling-hash multiplier.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Enable or disable parallel fingerprinting.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.window_size < 1 {
            return Err(PerceptualError::InvalidWindowSize {
                window_size: self.window_size,
            });
        }
        if !(2..HASH_MOD).contains(&self.base) {
            return Err(PerceptualError::InvalidBase { base: self.base });
        }
        Ok(())
    }
}

impl Default for PerceptualConfig {
    fn default() -> Self {
        Self {
            version: 1,
            window_size: 2,
            base: DEFAULT_BASE,
            use_parallel: false,
        }
    }
}

/// Errors returned by the fingerprinting layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: window_size must be >= 1 (got {window_size})")]
    InvalidWindowSize { window_size: usize },

    #[error("invalid config: base must be in [2, 1000000007) (got {base})")]
    InvalidBase { base: u64 },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = PerceptualConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.window_size, 2);
        assert_eq!(cfg.base, 256);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn config_builder_chain() {
        let cfg = PerceptualConfig::new()
            .with_window_size(5)
            .with_base(131)
            .with_parallel(true);
        assert_eq!(cfg.window_size, 5);
        assert_eq!(cfg.base, 131);
        assert!(cfg.use_parallel);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_validate_zero_window() {
        let cfg = PerceptualConfig::new().with_window_size(0);
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidWindowSize { window_size: 0 })
        ));
    }

    #[test]
    fn config_validate_base_out_of_range() {
        assert!(matches!(
            PerceptualConfig::new().with_base(1).validate(),
            Err(PerceptualError::InvalidBase { base: 1 })
        ));
        assert!(PerceptualConfig::new()
            .with_base(HASH_MOD)
            .validate()
            .is_err());
    }

    #[test]
    fn config_validate_version_zero() {
        let cfg = PerceptualConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigVersion { version: 0 })
        ));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = PerceptualConfig::new().with_window_size(4).with_parallel(true);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PerceptualConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn error_display_mentions_field() {
        let err = PerceptualError::InvalidWindowSize { window_size: 0 };
        assert!(err.to_string().contains("window_size must be >= 1"));
    }
}
