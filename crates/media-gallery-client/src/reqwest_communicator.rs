//! reqwest-based communicator
//!
//! Direct implementation of the `Communicator` trait on top of an async
//! `reqwest::Client`. Endpoint paths are appended to the configured base URL.

use crate::communicator::{Communicator, Response};
use crate::error::ApiError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Communicator making real HTTP calls
#[derive(Debug, Clone)]
pub struct ReqwestCommunicator {
    client: Client,
    base_url: String,
}

impl ReqwestCommunicator {
    /// Create a communicator for the server at `base_url`
    ///
    /// # Arguments
    ///
    /// * `base_url` - Server origin, optionally with a path prefix
    ///   (e.g. `https://example.com/api`)
    /// * `timeout` - Per-request timeout; expiry surfaces as a transport error
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("media-gallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a communicator around an already configured client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    fn resolve(&self, url: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base_url, url);
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))
    }

    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Response, ApiError> {
        let target = self.resolve(url)?;
        // The query string holds the auth token, keep it out of the logs
        debug!("{} {}", method, target.path());

        let mut request = self.client.request(method, target);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                text
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Response::new(status.as_u16(), body_value(text)))
    }
}

/// Body of a successful response
///
/// Empty bodies become `Null`; bodies that are not JSON are kept as a string
/// so callers that ignore the body still succeed.
fn body_value(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(e) => {
            debug!("Response body is not JSON ({}), keeping it as text", e);
            Value::String(text)
        }
    }
}

#[async_trait]
impl Communicator for ReqwestCommunicator {
    async fn get(&self, url: &str) -> Result<Response, ApiError> {
        self.send(Method::GET, url, None).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Response, ApiError> {
        self.send(Method::POST, url, Some(body)).await
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Response, ApiError> {
        self.send(Method::PUT, url, Some(body)).await
    }

    async fn delete(&self, url: &str) -> Result<Response, ApiError> {
        self.send(Method::DELETE, url, None).await
    }
}
