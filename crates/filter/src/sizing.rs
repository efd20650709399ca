//! Standard Bloom-filter sizing.
//!
//! For `n` expected items and target false-positive rate `p`:
//!
//! - counters: `m = ceil(-(n · ln p) / (ln 2)^2)`
//! - hash functions: `k = max(1, round((m / n) · ln 2))`

use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Shape of a filter.
///
/// `num_items` and `false_positive_rate` are the inputs the shape was sized
/// from. They are `None` for a filter built from an explicit shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FilterParams {
    /// Expected number of distinct insertions.
    #[serde(default)]
    pub num_items: Option<usize>,
    /// Target false-positive probability.
    #[serde(default)]
    pub false_positive_rate: Option<f64>,
    /// Counter array length (`m`).
    pub num_counters: usize,
    /// Number of hash functions (`k`).
    pub num_hashes: u32,
}

impl FilterParams {
    /// Derive `m` and `k` for `num_items` at `fpr`.
    pub fn optimal(num_items: usize, fpr: f64) -> Result<Self, FilterError> {
        let num_counters = optimal_num_counters(num_items, fpr)?;
        let num_hashes = optimal_num_hashes(num_counters, num_items)?;
        Ok(Self {
            num_items: Some(num_items),
            false_positive_rate: Some(fpr),
            num_counters,
            num_hashes,
        })
    }
}

/// `m = ceil(-(n · ln p) / (ln 2)^2)`.
pub fn optimal_num_counters(num_items: usize, fpr: f64) -> Result<usize, FilterError> {
    validate_inputs(num_items, fpr)?;
    let n = num_items as f64;
    let m = (-(n * fpr.ln()) / (LN_2 * LN_2)).ceil();
    Ok((m as usize).max(1))
}

/// `k = max(1, round((m / n) · ln 2))`.
pub fn optimal_num_hashes(num_counters: usize, num_items: usize) -> Result<u32, FilterError> {
    if num_items == 0 {
        return Err(FilterError::InvalidItemCount { num_items });
    }
    if num_counters == 0 {
        return Err(FilterError::InvalidCounterCount { num_counters });
    }
    let k = ((num_counters as f64 / num_items as f64) * LN_2).round();
    Ok((k as u32).max(1))
}

fn validate_inputs(num_items: usize, fpr: f64) -> Result<(), FilterError> {
    if num_items == 0 {
        return Err(FilterError::InvalidItemCount { num_items });
    }
    if !fpr.is_finite() || fpr <= 0.0 || fpr >= 1.0 {
        return Err(FilterError::InvalidFalsePositiveRate { fpr });
    }
    Ok(())
}
