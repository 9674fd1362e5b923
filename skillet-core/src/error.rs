use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("GET {url} failed ({status})")]
    Status { url: String, status: u16 },

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),

    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Request cancelled")]
    Cancelled,

    #[error("No candidate endpoints to try")]
    NoCandidates,
}

impl FetchError {
    /// Cancellation ends the whole probe; everything else only fails the
    /// current candidate.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Recipe id is required")]
    MissingId,

    #[error("Backend unavailable: {0}")]
    Backend(#[from] FetchError),
}
