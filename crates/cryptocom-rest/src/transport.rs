//! HTTP transport abstraction
//!
//! Endpoints talk to the exchange through the [`Transport`] trait, so tests
//! can inject a mock instead of making real network calls.
//!
//! Both verbs send `Content-Type: application/x-www-form-urlencoded`. GET
//! parameters go in the query string, POST parameters in the form body.
//! Response bodies are decoded as JSON and passed on as-is, whatever the HTTP
//! status.

use async_trait::async_trait;
use cryptocom_types::Params;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Content type sent with every request
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// DNS, connect, timeout or body read failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Parameters could not be form-encoded
    #[error("failed to encode parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Response body is not JSON
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Trait for HTTP transport abstraction
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET with `params` query-encoded
    async fn get(&self, url: &str, params: &Params) -> TransportResult<Value>;

    /// Send a POST with `params` form-encoded in the body
    async fn post(&self, url: &str, params: &Params) -> TransportResult<Value>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests are bounded by `timeout`
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, params), fields(params = params.len()))]
    async fn get(&self, url: &str, params: &Params) -> TransportResult<Value> {
        debug!("Sending GET");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .query(params)
            .send()
            .await?;

        decode(response).await
    }

    #[instrument(skip(self, params), fields(params = params.len()))]
    async fn post(&self, url: &str, params: &Params) -> TransportResult<Value> {
        debug!("Sending POST");

        let body = serde_urlencoded::to_string(params)?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode(response: reqwest::Response) -> TransportResult<Value> {
    let status = response.status();
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes)
        .map_err(|e| TransportError::Decode(format!("{} (HTTP {})", e, status)))
}
