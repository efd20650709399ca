//! Sliding-window extraction and per-window fingerprinting.
//!
//! Windows advance one token at a time. Each window's tokens are joined with
//! a single space and pushed through a [`RollingHash`] as one entry, read
//! back, then the hash is reset so every fingerprint is independent of the
//! windows before it.

use rayon::prelude::*;

use crate::config::{PerceptualConfig, PerceptualError};
use crate::fingerprint::WindowFingerprint;
use crate::rolling::RollingHash;

/// Number of windows of `window_size` tokens in a sequence of `len` tokens.
///
/// `max(0, len - window_size + 1)`; a zero window size yields no windows.
#[inline]
pub fn window_count(len: usize, window_size: usize) -> usize {
    if window_size == 0 || len < window_size {
        0
    } else {
        len - window_size + 1
    }
}

/// Join window tokens with single spaces.
pub fn join_window<S: AsRef<str>>(tokens: &[S]) -> String {
    let cap = tokens.iter().map(|t| t.as_ref().len() + 1).sum::<usize>();
    let mut out = String::with_capacity(cap);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Iterate over every window as its joined text, in order.
pub fn windows<'a, S: AsRef<str>>(
    tokens: &'a [S],
    window_size: usize,
) -> impl Iterator<Item = String> + 'a {
    let n = window_count(tokens.len(), window_size);
    (0..n).map(move |i| join_window(&tokens[i..i + window_size]))
}

/// Hash one window's text with `rh`, leaving `rh` reset afterwards.
#[inline]
pub fn hash_window_text(rh: &mut RollingHash, text: &str) -> u64 {
    rh.slide(text);
    let hash = rh.current_hash();
    rh.reset();
    hash
}

/// Fingerprint every window of `tokens`.
///
/// A sequence shorter than `cfg.window_size` yields an empty vector; an
/// invalid `cfg` is an error.
pub fn fingerprint_windows<S>(
    tokens: &[S],
    cfg: &PerceptualConfig,
) -> Result<Vec<WindowFingerprint>, PerceptualError>
where
    S: AsRef<str> + Sync,
{
    cfg.validate()?;
    let proto = RollingHash::new(cfg.base, cfg.window_size)?;
    let n = window_count(tokens.len(), cfg.window_size);
    if n == 0 {
        return Ok(Vec::new());
    }
    let w = cfg.window_size;

    if cfg.use_parallel {
        let mut out = Vec::with_capacity(n);
        (0..n)
            .into_par_iter()
            .map_init(
                || proto.clone(),
                |rh, i| WindowFingerprint {
                    hash: hash_window_text(rh, &join_window(&tokens[i..i + w])),
                    start_idx: i,
                },
            )
            .collect_into_vec(&mut out);
        Ok(out)
    } else {
        let mut rh = proto;
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let text = join_window(&tokens[i..i + w]);
            out.push(WindowFingerprint {
                hash: hash_window_text(&mut rh, &text),
                start_idx: i,
            });
        }
        Ok(out)
    }
}
