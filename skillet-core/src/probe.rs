//! Sequential endpoint discovery.
//!
//! The backend only documents a health endpoint, so the route surface is
//! treated as discovery rather than configuration: a list of plausible paths
//! is tried in order and the first successful JSON response wins.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::cancel::CancelToken;
use crate::error::FetchError;
use crate::http::HttpClient;

/// Probes candidate paths against a fixed base URL.
pub struct Prober {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout: Duration,
}

impl Prober {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Try each candidate path in order and return the first JSON body that
    /// a candidate answers with a 2xx status.
    ///
    /// `trailing_segment` is percent-encoded and appended to every path.
    /// Query pairs with empty values are omitted. A timeout, non-2xx status,
    /// or network failure fails only that candidate; candidates are never
    /// attempted concurrently. When all candidates fail, the error wraps the
    /// last failure encountered.
    pub async fn probe(
        &self,
        paths: &[&str],
        trailing_segment: Option<&str>,
        query: &[(&str, Option<&str>)],
        mut cancel: Option<CancelToken>,
    ) -> Result<serde_json::Value, FetchError> {
        let mut last_error: Option<FetchError> = None;

        for path in paths {
            if let Some(token) = &cancel {
                if token.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
            }

            let url = match candidate_url(&self.base_url, path, trailing_segment, query) {
                Ok(url) => url,
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            };

            match self.attempt(url.as_str(), cancel.as_mut()).await {
                Ok(json) => {
                    tracing::debug!(url = %url, "candidate succeeded");
                    return Ok(json);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "candidate failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(FetchError::NoCandidates))
    }

    /// One bounded attempt against a single URL.
    async fn attempt(
        &self,
        url: &str,
        cancel: Option<&mut CancelToken>,
    ) -> Result<serde_json::Value, FetchError> {
        let bounded = tokio::time::timeout(self.timeout, self.http.get_json(url));

        match cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(FetchError::Cancelled),
                result = bounded => result.map_err(|_| FetchError::TimedOut(self.timeout))?,
            },
            None => bounded
                .await
                .map_err(|_| FetchError::TimedOut(self.timeout))?,
        }
    }
}

/// Build the absolute URL for one candidate.
fn candidate_url(
    base: &str,
    path: &str,
    trailing_segment: Option<&str>,
    query: &[(&str, Option<&str>)],
) -> Result<Url, FetchError> {
    let mut url = Url::parse(&format!("{}{}", base, path))
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    if let Some(segment) = trailing_segment {
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("Not a base URL: {}", base)))?
            .push(segment);
    }

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            match value {
                Some(value) if !value.is_empty() => {
                    pairs.append_pair(key, value);
                }
                _ => {}
            }
        }
    }
    // query_pairs_mut leaves an empty query string when nothing was appended
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url)
}
