//! Whitespace normalization.

use crate::token::is_word_delimiter;

/// Collapse runs of word delimiters (space, `\n`, `\r`, `\t`) into single
/// spaces and trim both ends.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello \r\n\t world  "), "hello world");
/// assert_eq!(collapse_whitespace(" \n "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split(is_word_delimiter).filter(|s| !s.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
