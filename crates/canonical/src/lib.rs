//! Text cleaning for window-fingerprint comparison.
//!
//! Turns raw document text into the ordered lowercase word list that the
//! fingerprinting stage consumes.
//!
//! ## What we do
//!
//! - Optional Unicode NFKC (off by default)
//! - Delete a fixed set of punctuation characters (`;,.?!_[]()*` by default)
//! - Split on space, newline, carriage return and tab; drop empty pieces
//! - Lowercase each word
//! - Keep byte offsets of every word in the cleaned text
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same words on any machine. Empty input is not an error.
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//!
//! let cfg = CanonicalizeConfig::default();
//! let doc = canonicalize("The quick (brown) fox.\nJumps!", &cfg).unwrap();
//! assert_eq!(doc.words(), vec!["the", "quick", "brown", "fox", "jumps"]);
//! ```

mod config;
mod document;
mod error;
mod pipeline;
mod token;
mod whitespace;

pub use crate::config::{CanonicalizeConfig, DEFAULT_STRIP_CHARS};
pub use crate::document::CanonicalizedText;
pub use crate::error::CanonicalError;
pub use crate::pipeline::canonicalize;
pub use crate::token::{is_word_delimiter, tokenize, Token};
pub use crate::whitespace::collapse_whitespace;
