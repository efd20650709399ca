//! Where document text comes from.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// A document to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Local file, read as UTF-8.
    Path(PathBuf),
    /// `http://` or `https://` URL. Needs the `fetch` feature.
    Url(String),
    /// Text supplied directly.
    Inline(String),
}

impl TextSource {
    /// Classify a command-line argument: URLs by scheme, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            TextSource::Url(arg.to_string())
        } else {
            TextSource::Path(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Path(path) => write!(f, "{}", path.display()),
            TextSource::Url(url) => f.write_str(url),
            TextSource::Inline(text) => write!(f, "<inline, {} bytes>", text.len()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("cannot fetch {url}: built without the `fetch` feature")]
    FetchDisabled { url: String },
}

/// Load the full text of `source`.
pub fn load_text(source: &TextSource) -> Result<String, SourceError> {
    let text = match source {
        TextSource::Path(path) => fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?,
        TextSource::Url(url) => fetch(url)?,
        TextSource::Inline(text) => text.clone(),
    };
    debug!(source = %source, bytes = text.len(), "source_loaded");
    Ok(text)
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<String, SourceError> {
    let fail = |err: reqwest::Error| SourceError::Fetch {
        url: url.to_string(),
        message: err.to_string(),
    };
    reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(fail)
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<String, SourceError> {
    Err(SourceError::FetchDisabled {
        url: url.to_string(),
    })
}
