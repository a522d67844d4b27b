//! Encyclopedia client — Wikipedia REST page-summary lookups.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::LookupError;

/// Client for a Wikipedia-compatible REST endpoint.
///
/// Only the page-summary route is used; the returned `extract` field is the
/// plain text the session learns from.
#[derive(Debug, Clone)]
pub struct EncyclopediaClient {
    http: Client,
    base_url: String,
    timeout_ms: u64,
}

impl EncyclopediaClient {
    /// Create a client for `base_url` (e.g.
    /// `https://en.wikipedia.org/api/rest_v1`) with a per-request timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    /// Fetch the plain-text summary of the article titled `title`.
    ///
    /// # Errors
    /// - [`LookupError::NotFound`] when no article exists for the title —
    ///   callers report this to the user and carry on.
    /// - [`LookupError::Timeout`] / [`LookupError::RequestFailed`] /
    ///   [`LookupError::BadStatus`] / [`LookupError::ParseError`] for
    ///   transport and decoding failures.
    pub async fn fetch_summary(&self, title: &str) -> Result<String, LookupError> {
        let encoded = title.trim().replace(' ', "_");
        let url = format!("{}/page/summary/{encoded}", self.base_url);
        debug!(title, url = %url, "fetching article summary");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Timeout(self.timeout_ms)
                } else {
                    LookupError::from(e)
                }
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(LookupError::NotFound {
                    title: title.to_string(),
                });
            }
            status if !status.is_success() => {
                warn!(title, %status, "lookup endpoint returned an error status");
                return Err(LookupError::BadStatus {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::ParseError(e.to_string()))?;

        match body.get("extract").and_then(serde_json::Value::as_str) {
            Some(extract) if !extract.trim().is_empty() => Ok(extract.to_string()),
            _ => Err(LookupError::ParseError(
                "response carried no text extract".to_string(),
            )),
        }
    }
}
