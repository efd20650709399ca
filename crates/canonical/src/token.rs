use serde::{Deserialize, Serialize};

/// A word with its UTF-8 byte offsets in the cleaned text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Inclusive.
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// `true` for the characters that separate words: ASCII space, `\n`, `\r`, `\t`.
///
/// Other Unicode whitespace (such as U+00A0) stays inside a word.
#[inline]
pub fn is_word_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r' | '\t')
}

/// Split already-cleaned text into words with byte offsets.
///
/// Runs of delimiters produce no empty tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if is_word_delimiter(ch) {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}
