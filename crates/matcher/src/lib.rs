//! # Plagiarism Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` scores how much of a candidate token sequence also appears in a
//! reference sequence. It sits on top of `perceptual` (window fingerprints)
//! and `filter` (counting Bloom filter):
//!
//! 1. Every `window_size`-token window of the reference is fingerprinted and
//!    inserted into a freshly sized filter.
//! 2. Every window of the candidate is fingerprinted and tested against the
//!    filter.
//! 3. `score = matches / max(1, candidate_windows) * 100`.
//!
//! Filter false positives can only inflate the score; an identical window is
//! never missed.
//!
//! ## Core Types
//!
//! - [`CompareConfig`]: filter sizing, window size and parallelism.
//! - [`CompareReport`]: score, window counts, matched window text and the
//!   filter shape that produced them.
//! - [`Matcher`]: validated config plus the two-pass comparison.
//! - [`compare`]: one-shot helper returning just the score.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::compare;
//!
//! let reference = ["the", "quick", "brown", "fox"];
//! let candidate = ["quick", "brown", "fox"];
//! let score = compare(&reference, &candidate, 100, 0.01, 2).unwrap();
//! assert_eq!(score, 100.0);
//! ```
//!
//! ## Observability
//!
//! Install a [`CompareMetrics`] implementation via [`set_compare_metrics`] to
//! record per-comparison latency and window counts. Every call through
//! [`Matcher`] reports to the same recorder.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{compare, compare_with_config, fingerprint_key, score, Matcher};
pub use crate::metrics::{set_compare_metrics, CompareMetrics};
pub use crate::types::{CompareConfig, CompareReport, MatchError};
