use thiserror::Error;

/// Errors that can occur during canonicalization.
///
/// Empty or whitespace-only input is not an error; it yields no tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
