//! HTTP transport for the recipe backend.
//!
//! All outgoing requests go through the [`HttpClient`] trait so the probing
//! logic can be exercised in tests without a network.

mod client;

pub use client::{ApiClient, ApiClientBuilder, HttpClient, MockClient, MockResponse};
