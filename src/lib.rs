//! Workspace umbrella crate for the plagiarism detector.
//!
//! Stitches text cleaning (`canonical`), window fingerprinting
//! (`perceptual`), the counting Bloom filter (`filter`) and the two-pass
//! comparison (`matcher`) behind a single API entry point.
//!
//! ```
//! use plagiarism_detector::{compare_texts, CanonicalizeConfig, CompareConfig};
//!
//! let report = compare_texts(
//!     "The quick brown fox jumps over the lazy dog.",
//!     "the QUICK brown fox!",
//!     &CanonicalizeConfig::default(),
//!     &CompareConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(report.score, 100.0);
//! ```

pub mod config;
pub mod source;

pub use canonical::{
    canonicalize, collapse_whitespace, tokenize, CanonicalError, CanonicalizeConfig,
    CanonicalizedText, Token,
};
pub use filter::{CountingBloomFilter, FilterError, FilterParams};
pub use matcher::{
    compare, compare_with_config, set_compare_metrics, CompareConfig, CompareMetrics,
    CompareReport, MatchError, Matcher,
};
pub use perceptual::{
    fingerprint_text, fingerprint_tokens, fingerprint_window, PerceptualConfig, PerceptualError,
    RollingHash, WindowFingerprint,
};

pub use crate::config::{ConfigLoadError, DetectorConfig};
pub use crate::source::{load_text, SourceError, TextSource};

use std::error::Error;
use std::fmt;

use tracing::debug;

/// Errors that can occur while taking raw text through the whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Canonical(CanonicalError),
    Match(MatchError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Canonical(err) => write!(f, "canonicalization failure: {err}"),
            PipelineError::Match(err) => write!(f, "comparison failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Canonical(err) => Some(err),
            PipelineError::Match(err) => Some(err),
        }
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        PipelineError::Canonical(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// Clean both texts with `canonical_cfg`, then compare their word windows.
pub fn compare_texts(
    reference: &str,
    candidate: &str,
    canonical_cfg: &CanonicalizeConfig,
    compare_cfg: &CompareConfig,
) -> Result<CompareReport, PipelineError> {
    // Validate both stages before doing any work on the text.
    let matcher = Matcher::new(compare_cfg.clone())?;
    let reference_doc = canonicalize(reference, canonical_cfg)?;
    let candidate_doc = canonicalize(candidate, canonical_cfg)?;
    debug!(
        reference_words = reference_doc.len(),
        candidate_words = candidate_doc.len(),
        "texts_canonicalized"
    );
    Ok(matcher.compare(&reference_doc.tokens, &candidate_doc.tokens)?)
}

/// [`compare_texts`] with both stages configured from one [`DetectorConfig`].
pub fn check_texts(
    reference: &str,
    candidate: &str,
    cfg: &DetectorConfig,
) -> Result<CompareReport, PipelineError> {
    compare_texts(reference, candidate, &cfg.canonical, &cfg.compare)
}

/// Load both sources, then run [`check_texts`].
///
/// I/O failures and pipeline failures are reported through [`SourceError`]
/// and [`PipelineError`] respectively, wrapped in [`CheckError`].
pub fn check_sources(
    reference: &TextSource,
    candidate: &TextSource,
    cfg: &DetectorConfig,
) -> Result<CompareReport, CheckError> {
    let reference_text = load_text(reference)?;
    let candidate_text = load_text(candidate)?;
    Ok(check_texts(&reference_text, &candidate_text, cfg)?)
}

/// Failure of [`check_sources`].
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
