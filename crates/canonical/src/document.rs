//! Output of the cleaning pipeline.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Cleaned text plus its words.
///
/// `text` is exactly the token texts joined by single spaces, and every
/// token's offsets index into it.
///
/// ```rust
/// use canonical::{canonicalize, CanonicalizeConfig};
///
/// let doc = canonicalize("Hello, World!", &CanonicalizeConfig::default()).unwrap();
/// assert_eq!(doc.text, "hello world");
/// assert_eq!(doc.words(), vec!["hello", "world"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizedText {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Config version that produced this output.
    pub canonical_version: u32,
}

impl CanonicalizedText {
    /// Borrowed word list, in order.
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Owned word list, consuming the document.
    pub fn into_words(self) -> Vec<String> {
        self.tokens.into_iter().map(|t| t.text).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
