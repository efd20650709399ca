//! Word-level Rabin–Karp rolling hash.
//!
//! Every entry pushed into the window is prefixed with a separator byte
//! before its characters are folded in, so windows that only differ in where
//! the word boundaries fall (`"ab cd"` vs `"a bcd"`) do not collide by
//! accident of concatenation.
//!
//! The eviction step (`skip`) restarts its power accumulator at 1 on every
//! call instead of tracking the evicted entry's true position in the hash.
//! It is only exact when the window never grows past `window_size` between
//! resets, which is how the pipeline drives it: one `slide`, one
//! `current_hash`, one `reset` per window. Streaming a whole token sequence
//! through a single instance without resets yields values that are not
//! window fingerprints.

use std::collections::VecDeque;

use crate::config::PerceptualError;
use crate::{HASH_MOD, SEPARATOR};

/// Incremental polynomial hash over a bounded queue of words.
#[derive(Debug, Clone)]
pub struct RollingHash {
    base: u64,
    window_size: usize,
    hash_value: u64,
    hash_mod: u64,
    base_pow: u64,
    window: VecDeque<String>,
}

impl RollingHash {
    /// Create a rolling hash with the given multiplier and capacity in entries.
    pub fn new(base: u64, window_size: usize) -> Result<Self, PerceptualError> {
        if window_size == 0 {
            return Err(PerceptualError::InvalidWindowSize { window_size });
        }
        if !(2..HASH_MOD).contains(&base) {
            return Err(PerceptualError::InvalidBase { base });
        }
        Ok(Self {
            base,
            window_size,
            hash_value: 0,
            hash_mod: HASH_MOD,
            base_pow: initial_base_pow(base, window_size),
            window: VecDeque::with_capacity(window_size + 1),
        })
    }

    /// Fold a separator and then every character of `word` into the hash.
    pub fn append(&mut self, word: &str) {
        self.hash_value = self.fold(self.hash_value, SEPARATOR as u64);
        for ch in word.chars() {
            self.hash_value = self.fold(self.hash_value, ch as u64);
        }
        self.window.push_back(word.to_owned());
    }

    /// Drop the oldest entry and subtract its contribution. No-op when empty.
    pub fn skip(&mut self) {
        let Some(old_word) = self.window.pop_front() else {
            return;
        };
        let mut word_pow = 1u64;
        for ch in old_word.chars() {
            self.hash_value = self.unfold(self.hash_value, ch as u64, word_pow);
            word_pow = (word_pow * self.base) % self.hash_mod;
        }
        self.hash_value = self.unfold(self.hash_value, SEPARATOR as u64, word_pow);
    }

    /// Push `new_word`, evicting the oldest entry first when at capacity.
    pub fn slide(&mut self, new_word: &str) {
        if self.window.len() >= self.window_size {
            self.skip();
        }
        self.append(new_word);
    }

    /// Current fingerprint, always in `[0, HASH_MOD)`.
    #[inline]
    pub fn current_hash(&self) -> u64 {
        self.hash_value
    }

    /// Return to the freshly constructed state, keeping the queue allocation.
    pub fn reset(&mut self) {
        self.hash_value = 0;
        self.base_pow = 1;
        self.window.clear();
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of entries currently contributing to the hash.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Entries in the window, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.window.iter().map(String::as_str)
    }

    /// `base^(window_size - 1)` right after construction, 1 after [`reset`](Self::reset).
    /// Eviction does not read it.
    pub fn base_pow(&self) -> u64 {
        self.base_pow
    }

    #[inline]
    fn fold(&self, acc: u64, value: u64) -> u64 {
        // acc and base are both below HASH_MOD, so the product fits in u64.
        (acc * self.base + value) % self.hash_mod
    }

    #[inline]
    fn unfold(&self, acc: u64, value: u64, pow: u64) -> u64 {
        let term = (value as i128) * (pow as i128);
        ((acc as i128) - term).rem_euclid(self.hash_mod as i128) as u64
    }
}

fn initial_base_pow(base: u64, window_size: usize) -> u64 {
    let mut pow = 1u64;
    for _ in 1..window_size {
        pow = (pow * base) % HASH_MOD;
    }
    pow
}
