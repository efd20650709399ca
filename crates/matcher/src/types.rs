use filter::{FilterError, FilterParams};
use perceptual::{PerceptualConfig, PerceptualError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one reference-vs-candidate comparison.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// config files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareConfig {
    /// Configuration schema version.
    #[serde(default = "CompareConfig::default_version")]
    pub version: u32,
    /// Expected number of distinct reference windows; sizes the filter.
    #[serde(default = "CompareConfig::default_num_items")]
    pub num_items: usize,
    /// Target false-positive probability of the filter, in (0, 1).
    #[serde(default = "CompareConfig::default_false_positive_rate")]
    pub false_positive_rate: f64,
    /// Window size, hash base and parallelism for fingerprinting.
    #[serde(default)]
    pub perceptual: PerceptualConfig,
    /// Keep the text of every matched candidate window in the report.
    #[serde(default = "CompareConfig::default_record_matches")]
    pub record_matches: bool,
}

impl CompareConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_num_items() -> usize {
        10_000
    }

    pub(crate) fn default_false_positive_rate() -> f64 {
        0.01
    }

    pub(crate) fn default_record_matches() -> bool {
        true
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_items(mut self, num_items: usize) -> Self {
        self.num_items = num_items;
        self
    }

    pub fn with_false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = fpr;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.perceptual.window_size = window_size;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.perceptual.use_parallel = use_parallel;
        self
    }

    pub fn with_record_matches(mut self, record_matches: bool) -> Self {
        self.record_matches = record_matches;
        self
    }

    pub fn window_size(&self) -> usize {
        self.perceptual.window_size
    }

    /// Validate the configuration before any filter is allocated.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version < 1 {
            return Err(MatchError::InvalidConfig(format!(
                "config version must be >= 1 (got {})",
                self.version
            )));
        }
        self.perceptual.validate()?;
        FilterParams::optimal(self.num_items, self.false_positive_rate)?;
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            num_items: Self::default_num_items(),
            false_positive_rate: Self::default_false_positive_rate(),
            perceptual: PerceptualConfig::default(),
            record_matches: Self::default_record_matches(),
        }
    }
}

/// Outcome of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareReport {
    /// Percentage of candidate windows found in the reference, in `[0, 100]`.
    pub score: f64,
    /// Candidate windows that tested present in the filter.
    pub match_count: usize,
    pub reference_windows: usize,
    pub candidate_windows: usize,
    /// Joined text of each matched candidate window, in candidate order.
    ///
    /// Empty when `record_matches` is off.
    #[serde(default)]
    pub matched_windows: Vec<String>,
    /// Shape of the filter built for this comparison.
    pub filter: FilterParams,
}

impl CompareReport {
    /// `true` when every candidate window matched and there was at least one.
    pub fn is_full_match(&self) -> bool {
        self.candidate_windows > 0 && self.match_count == self.candidate_windows
    }
}

/// Errors produced by the comparison pipeline. All are configuration errors;
/// short or empty inputs are not errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Perceptual(#[from] PerceptualError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = CompareConfig::default();
        assert_eq!(cfg.num_items, 10_000);
        assert_eq!(cfg.false_positive_rate, 0.01);
        assert_eq!(cfg.window_size(), 2);
        assert!(cfg.record_matches);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_sets_nested_window() {
        let cfg = CompareConfig::new()
            .with_window_size(3)
            .with_parallel(true)
            .with_record_matches(false);
        assert_eq!(cfg.perceptual.window_size, 3);
        assert!(cfg.perceptual.use_parallel);
        assert!(!cfg.record_matches);
    }

    #[test]
    fn validate_rejects_zero_items() {
        let err = CompareConfig::new().with_num_items(0).validate().unwrap_err();
        assert_eq!(
            err,
            MatchError::Filter(FilterError::InvalidItemCount { num_items: 0 })
        );
    }

    #[test]
    fn validate_rejects_bad_rate() {
        for fpr in [0.0, 1.0, 2.0, -0.1, f64::NAN] {
            let err = CompareConfig::new()
                .with_false_positive_rate(fpr)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                MatchError::Filter(FilterError::InvalidFalsePositiveRate { .. })
            ));
        }
    }

    #[test]
    fn validate_agrees_with_filter_sizing() {
        let cases = [
            (10_000, 0.01),
            (1, 0.5),
            (0, 0.01),
            (100, 0.0),
            (100, 1.0),
            (100, f64::INFINITY),
        ];
        for (num_items, fpr) in cases {
            let cfg = CompareConfig::new()
                .with_num_items(num_items)
                .with_false_positive_rate(fpr);
            let sized = FilterParams::optimal(num_items, fpr).map(|_| ());
            assert_eq!(
                cfg.validate(),
                sized.map_err(MatchError::from),
                "num_items={num_items} fpr={fpr}"
            );
        }
    }

    #[test]
    fn validate_rejects_zero_window() {
        let err = CompareConfig::new().with_window_size(0).validate().unwrap_err();
        assert_eq!(
            err,
            MatchError::Perceptual(PerceptualError::InvalidWindowSize { window_size: 0 })
        );
    }

    #[test]
    fn validate_rejects_version_zero() {
        let cfg = CompareConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: CompareConfig = serde_json::from_str(r#"{"num_items": 500}"#).unwrap();
        assert_eq!(cfg.num_items, 500);
        assert_eq!(cfg.false_positive_rate, 0.01);
        assert_eq!(cfg.perceptual, PerceptualConfig::default());
    }

    #[test]
    fn report_full_match() {
        let report = CompareReport {
            score: 100.0,
            match_count: 3,
            reference_windows: 3,
            candidate_windows: 3,
            matched_windows: Vec::new(),
            filter: filter::FilterParams::optimal(10, 0.01).unwrap(),
        };
        assert!(report.is_full_match());
        let empty = CompareReport {
            match_count: 0,
            candidate_windows: 0,
            score: 0.0,
            ..report
        };
        assert!(!empty.is_full_match());
    }
}
