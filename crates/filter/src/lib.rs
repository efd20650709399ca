//! # Counting Bloom filter
//!
//! Approximate-membership set over arbitrary byte keys, backed by an array
//! of saturating `u8` counters addressed by `k` hash functions.
//!
//! ## Guarantees
//!
//! - No false negatives: an inserted key always tests present until it is
//!   removed as many times as it was inserted.
//! - False positives occur at roughly the configured rate while the number of
//!   distinct insertions stays near `num_items`; going past it degrades the
//!   rate but is not an error.
//! - Hashing is seeded with fixed constants, so results are reproducible
//!   across processes.
//!
//! ## Example Usage
//!
//! ```
//! use filter::CountingBloomFilter;
//!
//! let mut cbf = CountingBloomFilter::new(10_000, 0.01).unwrap();
//! cbf.insert("418772910");
//! assert!(cbf.is_word_present("418772910"));
//! ```
mod counting;
mod error;
mod hash;
pub mod sizing;

pub use crate::counting::CountingBloomFilter;
pub use crate::error::FilterError;
pub use crate::sizing::{optimal_num_counters, optimal_num_hashes, FilterParams};
