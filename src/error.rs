//! Error types shared across the crate.

use crate::models::Family;
use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("mixed address families: {prefix} is not an {expected} network")]
    MixedFamily { expected: Family, prefix: String },

    #[error("{0}")]
    NetworkFailure(#[from] NetworkError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Failures of the single prefix lookup request.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response body at path '{path}': {reason}")]
    Body { path: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_prefix(prefix: &str, reason: impl ToString) -> Self {
        Error::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: reason.to_string(),
        }
    }
}
