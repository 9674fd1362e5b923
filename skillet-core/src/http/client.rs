//! HTTP client trait and implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::FetchError;

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and parse the body as JSON.
    ///
    /// A non-2xx status is an error; the response body is not inspected in
    /// that case.
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}

/// Configuration for [`ApiClient`].
#[derive(Clone)]
pub struct ApiClientBuilder {
    user_agent: String,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            user_agent: "Skillet/0.1 (+https://github.com/skillet-app/skillet)".to_string(),
        }
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the ApiClient.
    pub fn build(self) -> Result<ApiClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .build()?;
        Ok(ApiClient { inner })
    }
}

/// Production HTTP client backed by reqwest.
///
/// Timeouts are not set here: the prober bounds each attempt itself so the
/// limit applies uniformly to mock and real transports.
pub struct ApiClient {
    inner: reqwest::Client,
}

impl ApiClient {
    /// Create a new ApiClient with default configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        ApiClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }
}

#[async_trait]
impl HttpClient for ApiClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .inner
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = %status, "request failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::InvalidJson(e.to_string()))
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    Json(serde_json::Value),
    Status(u16),
    Error(String),
    /// Never resolves, so the prober's timeout or cancellation wins.
    Hang,
}

/// Mock HTTP client for testing.
///
/// Records every requested URL so tests can assert probe order and that
/// later candidates were never attempted.
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a JSON response for a URL.
    pub fn with_json(self, url: &str, json: serde_json::Value) -> Self {
        self.with_response(url, MockResponse::Json(json))
    }

    /// Add a non-2xx status response for a URL.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a network-level error for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }

    /// Make requests to a URL hang forever.
    pub fn with_hang(self, url: &str) -> Self {
        self.with_response(url, MockResponse::Hang)
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(MockResponse::Json(json)) => Ok(json.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidUrl(e.clone())),
            Some(MockResponse::Hang) => std::future::pending().await,
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
