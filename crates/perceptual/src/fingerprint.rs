//! Window fingerprint type.

use serde::{Deserialize, Serialize};

/// Fingerprint of one token window together with where it starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WindowFingerprint {
    /// Rolling-hash value in `[0, HASH_MOD)`.
    pub hash: u64,
    /// Index of the window's first token in the source sequence.
    pub start_idx: usize,
}

impl WindowFingerprint {
    /// Tokens covered by this window, joined by single spaces.
    ///
    /// Returns `None` if the window does not fit inside `tokens`.
    pub fn text<S: AsRef<str>>(&self, tokens: &[S], window_size: usize) -> Option<String> {
        let end = self.start_idx.checked_add(window_size)?;
        let slice = tokens.get(self.start_idx..end)?;
        Some(crate::window::join_window(slice))
    }
}
