//! Counting Bloom filter backed by saturating `u8` counters.

use tracing::debug;

use crate::error::FilterError;
use crate::hash::counter_indices;
use crate::sizing::FilterParams;

/// Approximate-membership set with removal support.
///
/// `insert` bumps `k` counters, `is_word_present` checks that all `k` are
/// nonzero. An inserted key always tests present. A counter that reaches
/// `u8::MAX` stays there, since its true count is no longer known.
#[derive(Clone)]
pub struct CountingBloomFilter {
    counters: Vec<u8>,
    params: FilterParams,
    inserted: u64,
}

impl CountingBloomFilter {
    /// Size a filter for `num_items` distinct keys at false-positive rate `fpr`.
    pub fn new(num_items: usize, fpr: f64) -> Result<Self, FilterError> {
        let params = FilterParams::optimal(num_items, fpr)?;
        debug!(
            num_items,
            fpr,
            num_counters = params.num_counters,
            num_hashes = params.num_hashes,
            "counting_filter_new"
        );
        Ok(Self::from_params(params))
    }

    /// Build a filter with an explicit counter count and hash count.
    ///
    /// No sizing inputs are involved, so [`FilterParams::num_items`] and
    /// [`FilterParams::false_positive_rate`] are `None` in [`Self::params`].
    pub fn with_params(num_counters: usize, num_hashes: u32) -> Result<Self, FilterError> {
        if num_counters == 0 {
            return Err(FilterError::InvalidCounterCount { num_counters });
        }
        if num_hashes == 0 {
            return Err(FilterError::InvalidHashCount { num_hashes });
        }
        Ok(Self::from_params(FilterParams {
            num_items: None,
            false_positive_rate: None,
            num_counters,
            num_hashes,
        }))
    }

    fn from_params(params: FilterParams) -> Self {
        Self {
            counters: vec![0u8; params.num_counters],
            params,
            inserted: 0,
        }
    }

    /// Record `key`. Always succeeds.
    pub fn insert<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) {
        for idx in counter_indices(key.as_ref(), self.params.num_hashes, self.params.num_counters)
        {
            let slot = &mut self.counters[idx];
            *slot = slot.saturating_add(1);
        }
        self.inserted = self.inserted.saturating_add(1);
    }

    /// `true` if every counter for `key` is nonzero.
    ///
    /// Never false for an inserted key; false positives occur at roughly the
    /// configured rate while insertions stay near `num_items`.
    #[must_use]
    pub fn is_word_present<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        counter_indices(key.as_ref(), self.params.num_hashes, self.params.num_counters)
            .all(|idx| self.counters[idx] > 0)
    }

    /// Alias of [`is_word_present`](Self::is_word_present).
    #[inline]
    #[must_use]
    pub fn contains<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.is_word_present(key)
    }

    /// Undo one insertion of `key`.
    ///
    /// Does nothing and returns `false` when `key` does not test present.
    /// Counters never drop below zero and saturated counters are left as is.
    pub fn remove<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> bool {
        if !self.is_word_present(key) {
            return false;
        }
        for idx in counter_indices(key.as_ref(), self.params.num_hashes, self.params.num_counters)
        {
            let slot = &mut self.counters[idx];
            if *slot != u8::MAX {
                *slot = slot.saturating_sub(1);
            }
        }
        self.inserted = self.inserted.saturating_sub(1);
        true
    }

    /// Smallest counter among `key`'s slots; an upper bound on its insert count.
    pub fn estimate_count<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> u8 {
        counter_indices(key.as_ref(), self.params.num_hashes, self.params.num_counters)
            .map(|idx| self.counters[idx])
            .min()
            .unwrap_or(0)
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    pub fn num_counters(&self) -> usize {
        self.params.num_counters
    }

    pub fn num_hashes(&self) -> u32 {
        self.params.num_hashes
    }

    /// Insertions minus successful removals.
    pub fn inserted_items(&self) -> u64 {
        self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// `(1 - e^(-k·n/m))^k` for the `n` insertions so far.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let k = self.params.num_hashes as f64;
        let m = self.params.num_counters as f64;
        let n = self.inserted as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }

    /// Heap bytes used by the counter array.
    pub fn memory_bytes(&self) -> usize {
        self.counters.len()
    }
}

impl std::fmt::Debug for CountingBloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountingBloomFilter")
            .field("num_counters", &self.params.num_counters)
            .field("num_hashes", &self.params.num_hashes)
            .field("inserted", &self.inserted)
            .finish()
    }
}
