//! # Window fingerprinting
//!
//! Turns an ordered stream of cleaned word tokens into one fingerprint per
//! sliding window of `window_size` tokens, using a word-level Rabin–Karp
//! rolling hash.
//!
//! ## Contract
//!
//! - Consumes tokens that are already lowercased and punctuation-stripped.
//!   It never normalizes or splits text itself.
//! - Pure function of `(tokens, config)`: no I/O, no clocks, no global state.
//! - Equal windows (same tokens, same order) always get the same fingerprint.
//!   Different windows may collide; fingerprints live in `[0, HASH_MOD)`.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{fingerprint_tokens, PerceptualConfig};
//!
//! let tokens = vec!["the", "quick", "brown", "fox"];
//! let cfg = PerceptualConfig::new().with_window_size(2);
//!
//! let fps = fingerprint_tokens(&tokens, &cfg).unwrap();
//! assert_eq!(fps.len(), 3);
//! assert!(fps.iter().all(|fp| fp.hash < perceptual::HASH_MOD));
//! ```
pub mod config;
pub mod fingerprint;
pub mod rolling;
pub mod window;

use tracing::debug;

pub use crate::config::{PerceptualConfig, PerceptualError};
pub use crate::fingerprint::WindowFingerprint;
pub use crate::rolling::RollingHash;
pub use crate::window::{fingerprint_windows, join_window, window_count, windows};

/// Rolling-hash modulus.
pub const HASH_MOD: u64 = 1_000_000_007;

/// Default polynomial multiplier.
pub const DEFAULT_BASE: u64 = 256;

/// Folded in ahead of every window entry.
pub const SEPARATOR: char = '|';

/// Fingerprint every sliding window of `tokens`.
///
/// A sequence shorter than `cfg.window_size` has no windows and returns an
/// empty vector, not an error.
pub fn fingerprint_tokens<S>(
    tokens: &[S],
    cfg: &PerceptualConfig,
) -> Result<Vec<WindowFingerprint>, PerceptualError>
where
    S: AsRef<str> + Sync,
{
    let fps = fingerprint_windows(tokens, cfg)?;
    debug!(
        tokens = tokens.len(),
        windows = fps.len(),
        window_size = cfg.window_size,
        parallel = cfg.use_parallel,
        "fingerprint_windows"
    );
    Ok(fps)
}

/// Fingerprint a single already-joined window text.
///
/// Same value as `slide(text)` then `current_hash()` on a fresh
/// [`RollingHash`] with [`DEFAULT_BASE`].
pub fn fingerprint_text(text: &str) -> u64 {
    let mut h = 0u64;
    for value in std::iter::once(SEPARATOR).chain(text.chars()) {
        h = (h * DEFAULT_BASE + value as u64) % HASH_MOD;
    }
    h
}

/// Fingerprint one window given as separate tokens.
pub fn fingerprint_window<S: AsRef<str>>(tokens: &[S]) -> u64 {
    fingerprint_text(&join_window(tokens))
}
