use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;
use crate::document::CanonicalizedText;
use crate::error::CanonicalError;
use crate::token::{is_word_delimiter, Token};

/// Clean raw text into lowercase words.
///
/// Steps, in order: optional NFKC, deletion of `strip_chars`, splitting on
/// space/`\n`/`\r`/`\t` with empty pieces dropped, then per-word lowercasing.
pub fn canonicalize(
    input: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalizedText, CanonicalError> {
    cfg.validate()?;

    // NFKC can change character boundaries, so it runs before anything else.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let mut text = String::with_capacity(normalized.len());
    let mut tokens: Vec<Token> = Vec::with_capacity((normalized.len() / 5).saturating_add(1));
    let mut word = String::new();

    for ch in normalized.chars() {
        if cfg.strips(ch) {
            continue;
        }
        if is_word_delimiter(ch) {
            finalize_word(&mut word, cfg, &mut text, &mut tokens);
        } else {
            word.push(ch);
        }
    }
    finalize_word(&mut word, cfg, &mut text, &mut tokens);

    Ok(CanonicalizedText {
        text,
        tokens,
        canonical_version: cfg.version,
    })
}

/// Flush the pending word, if any, into `text` and `tokens`.
fn finalize_word(
    word: &mut String,
    cfg: &CanonicalizeConfig,
    text: &mut String,
    tokens: &mut Vec<Token>,
) {
    if word.is_empty() {
        return;
    }
    // Whole-word lowercasing keeps context-sensitive mappings such as final sigma.
    let finished = if cfg.lowercase {
        word.to_lowercase()
    } else {
        word.clone()
    };
    word.clear();

    if !text.is_empty() {
        text.push(' ');
    }
    let start = text.len();
    text.push_str(&finished);
    tokens.push(Token {
        text: finished,
        start,
        end: text.len(),
    });
}
