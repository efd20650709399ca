//! Counter-index derivation.
//!
//! Two seeded xxh3 hashes drive Kirsch–Mitzenmacher double hashing:
//! `index_i = (h1 + i · h2) mod m` for `i in 0..k`. Seeds are fixed, so a key
//! maps to the same counters in every process.

use xxhash_rust::xxh3::xxh3_64_with_seed;

const SEED_PRIMARY: u64 = 0x517c_c1b7_2722_0a95;
const SEED_SECONDARY: u64 = 0x9e37_79b1_85eb_ca87;

/// Iterator over the `k` counter indices for one key.
#[derive(Debug, Clone)]
pub(crate) struct CounterIndices {
    h1: u64,
    h2: u64,
    i: u64,
    k: u64,
    m: u64,
}

impl Iterator for CounterIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.i >= self.k {
            return None;
        }
        let combined = self.h1.wrapping_add(self.i.wrapping_mul(self.h2));
        self.i += 1;
        Some((combined % self.m) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.k - self.i) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CounterIndices {}

/// Counter indices for `key` in a filter with `num_counters` slots and
/// `num_hashes` hash functions.
#[inline]
pub(crate) fn counter_indices(key: &[u8], num_hashes: u32, num_counters: usize) -> CounterIndices {
    let h1 = xxh3_64_with_seed(key, SEED_PRIMARY);
    // Odd step so consecutive probes never collapse onto one slot when m is a power of two.
    let h2 = splitmix64(xxh3_64_with_seed(key, SEED_SECONDARY)) | 1;
    CounterIndices {
        h1,
        h2,
        i: 0,
        k: num_hashes as u64,
        m: num_counters as u64,
    }
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
