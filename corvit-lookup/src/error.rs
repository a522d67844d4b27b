//! Lookup error types.

use thiserror::Error;

/// Errors that can occur during an encyclopedia lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No article exists for the requested title.
    #[error("No article found for '{title}'")]
    NotFound {
        /// The title that was looked up.
        title: String,
    },

    /// HTTP request failed.
    #[error("Lookup request failed: {0}")]
    RequestFailed(String),

    /// Request timed out.
    #[error("Lookup timed out after {0}ms")]
    Timeout(u64),

    /// The endpoint answered with an unexpected status.
    #[error("Lookup endpoint returned HTTP {status}")]
    BadStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body did not contain a usable extract.
    #[error("Failed to parse lookup response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout(0)
        } else {
            LookupError::RequestFailed(err.to_string())
        }
    }
}
