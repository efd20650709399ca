//! Configuration for the text cleaning pipeline.
//!
//! # Versioning
//!
//! Any change to cleaning behavior must come with a `version` bump, so that
//! tokens produced under one version are never silently compared against
//! tokens produced under another.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(!config.normalize_unicode);
//! assert_eq!(config.strip_chars, ";,.?!_[]()*");
//! ```
//!
//! Keeping punctuation:
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::new().with_strip_chars("");
//! assert!(config.strip_chars.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Characters deleted from the input before it is split into words.
pub const DEFAULT_STRIP_CHARS: &str = ";,.?!_[]()*";

/// Configuration for [`canonicalize`](crate::canonicalize).
///
/// Serialized form:
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": false,
///   "lowercase": true,
///   "strip_chars": ";,.?!_[]()*"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Behavior version. Must be >= 1; 0 is reserved and rejected.
    pub version: u32,

    /// Apply Unicode NFKC before anything else.
    ///
    /// Off by default, so `"Cafe\u{301}"` and `"Caf\u{e9}"` are different
    /// words unless this is enabled.
    pub normalize_unicode: bool,

    /// Lowercase every word after splitting.
    pub lowercase: bool,

    /// Every character in this string is deleted outright. Deletion does not
    /// split a word: `"it's."` keeps the apostrophe and loses the period.
    pub strip_chars: String,
}

impl CanonicalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_strip_chars(mut self, strip_chars: impl Into<String>) -> Self {
        self.strip_chars = strip_chars.into();
        self
    }

    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn strips(&self, ch: char) -> bool {
        self.strip_chars.contains(ch)
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            lowercase: true,
            strip_chars: DEFAULT_STRIP_CHARS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_zero_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: CanonicalizeConfig = serde_json::from_str(r#"{"lowercase": false}"#).unwrap();
        assert!(!cfg.lowercase);
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.strip_chars, DEFAULT_STRIP_CHARS);
    }
}
