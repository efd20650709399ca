use std::time::Instant;

use filter::CountingBloomFilter;
use perceptual::{fingerprint_tokens, join_window, WindowFingerprint};
use rayon::prelude::*;
use tracing::{debug, info, warn, Level};

use crate::metrics::metrics_recorder;
use crate::types::{CompareConfig, CompareReport, MatchError};


/// Two-pass comparator: fingerprints of the reference populate a counting
/// Bloom filter, then every candidate window is looked up in it.
///
/// Each call to [`Matcher::compare`] builds and drops its own filter, so a
/// `Matcher` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    cfg: CompareConfig,
}

impl Matcher {
    /// Validate `cfg` once up front.
    pub fn new(cfg: CompareConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &CompareConfig {
        &self.cfg
    }

    /// Score how much of `candidate` appears in `reference`.
    pub fn compare<R, C>(
        &self,
        reference: &[R],
        candidate: &[C],
    ) -> Result<CompareReport, MatchError>
    where
        R: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.compare",
            reference_tokens = reference.len(),
            candidate_tokens = candidate.len(),
            window_size = self.cfg.window_size()
        );
        let _guard = span.enter();

        match self.compare_inner(reference, candidate) {
            Ok(report) => {
                let latency = start.elapsed();
                info!(
                    score = report.score,
                    match_count = report.match_count,
                    reference_windows = report.reference_windows,
                    candidate_windows = report.candidate_windows,
                    elapsed_micros = latency.as_micros(),
                    "compare_success"
                );
                if let Some(recorder) = metrics_recorder() {
                    recorder.record_compare(
                        latency,
                        report.reference_windows,
                        report.candidate_windows,
                        report.match_count,
                    );
                }
                Ok(report)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    elapsed_micros = start.elapsed().as_micros(),
                    "compare_failure"
                );
                Err(err)
            }
        }
    }

    fn compare_inner<R, C>(
        &self,
        reference: &[R],
        candidate: &[C],
    ) -> Result<CompareReport, MatchError>
    where
        R: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        let mut bloom =
            CountingBloomFilter::new(self.cfg.num_items, self.cfg.false_positive_rate)?;
        let perceptual_cfg = &self.cfg.perceptual;

        // Pass 1: every reference window goes into the filter before any query runs.
        let reference_fps = fingerprint_tokens(reference, perceptual_cfg)?;
        for fp in &reference_fps {
            bloom.insert(&fingerprint_key(fp));
        }
        debug!(
            windows = reference_fps.len(),
            estimated_fpr = bloom.estimated_false_positive_rate(),
            "reference_pass_complete"
        );

        // Pass 2: the filter is read-only from here on.
        let candidate_fps = fingerprint_tokens(candidate, perceptual_cfg)?;
        let hits: Vec<usize> = if perceptual_cfg.use_parallel {
            candidate_fps
                .par_iter()
                .filter(|fp| bloom.is_word_present(&fingerprint_key(fp)))
                .map(|fp| fp.start_idx)
                .collect()
        } else {
            candidate_fps
                .iter()
                .filter(|fp| bloom.is_word_present(&fingerprint_key(fp)))
                .map(|fp| fp.start_idx)
                .collect()
        };
        debug!(
            windows = candidate_fps.len(),
            hits = hits.len(),
            "candidate_pass_complete"
        );

        let window_size = perceptual_cfg.window_size;
        let matched_windows = if self.cfg.record_matches {
            hits.iter()
                .map(|&i| join_window(&candidate[i..i + window_size]))
                .collect()
        } else {
            Vec::new()
        };

        Ok(CompareReport {
            score: score(hits.len(), candidate_fps.len()),
            match_count: hits.len(),
            reference_windows: reference_fps.len(),
            candidate_windows: candidate_fps.len(),
            matched_windows,
            filter: bloom.params(),
        })
    }
}

/// Compare with a full configuration and get the detailed report.
pub fn compare_with_config<R, C>(
    reference: &[R],
    candidate: &[C],
    cfg: &CompareConfig,
) -> Result<CompareReport, MatchError>
where
    R: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    Matcher::new(cfg.clone())?.compare(reference, candidate)
}

/// Percentage of `candidate` windows whose fingerprints occur in `reference`.
///
/// Sequences shorter than `window_size` contribute no windows; the score is
/// then 0 rather than a division by zero.
pub fn compare<R, C>(
    reference: &[R],
    candidate: &[C],
    num_items: usize,
    fpr: f64,
    window_size: usize,
) -> Result<f64, MatchError>
where
    R: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    let cfg = CompareConfig::new()
        .with_num_items(num_items)
        .with_false_positive_rate(fpr)
        .with_window_size(window_size)
        .with_record_matches(false);
    compare_with_config(reference, candidate, &cfg).map(|report| report.score)
}

/// `match_count / max(1, window_count) * 100`.
#[inline]
pub fn score(match_count: usize, window_count: usize) -> f64 {
    (match_count as f64 / window_count.max(1) as f64) * 100.0
}

/// Filter key for a window: the fingerprint's decimal form.
#[inline]
pub fn fingerprint_key(fp: &WindowFingerprint) -> String {
    fp.hash.to_string()
}
