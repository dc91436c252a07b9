//! Failure taxonomy for discovery and fetching.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Request failure, timeout, or non-success HTTP status.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid selector `{selector}`: {reason}")]
    Parse { selector: String, reason: String },

    #[error("clone of {url} failed: {reason}")]
    Clone { url: String, reason: String },

    #[error("writing {} failed: {source}", path.display())]
    Download {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no download link found for {name}")]
    NotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
