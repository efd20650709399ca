use thiserror::Error;

/// Errors raised when a filter is configured with unusable parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("invalid config: num_items must be >= 1 (got {num_items})")]
    InvalidItemCount { num_items: usize },

    #[error("invalid config: false positive rate must be in (0, 1) (got {fpr})")]
    InvalidFalsePositiveRate { fpr: f64 },

    #[error("invalid config: counter count must be >= 1 (got {num_counters})")]
    InvalidCounterCount { num_counters: usize },

    #[error("invalid config: hash count must be >= 1 (got {num_hashes})")]
    InvalidHashCount { num_hashes: u32 },
}
