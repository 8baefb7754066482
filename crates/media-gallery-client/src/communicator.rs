//! Communicator trait
//!
//! The communicator is the only place the gallery store touches the network.
//! It is injected into the operation layer, so tests swap in an in-memory
//! implementation instead of the HTTP one.

use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Successful (2xx) response of a communicator call
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body; `Value::Null` when the body was empty
    pub data: Value,
}

impl Response {
    /// Create a response with the given status and body
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    /// A 200 response carrying `data`
    pub fn ok(data: Value) -> Self {
        Self::new(200, data)
    }

    /// A 204 response without a body
    pub fn no_content() -> Self {
        Self::new(204, Value::Null)
    }
}

/// HTTP communicator trait
///
/// URLs are server-relative paths including the query string, as built by
/// [`crate::endpoints`]. Every method resolves with a [`Response`] on 2xx and
/// fails with an [`ApiError`] otherwise.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single communicator can be
/// shared across async tasks.
#[async_trait]
pub trait Communicator: Send + Sync {
    /// Issue a GET request
    async fn get(&self, url: &str) -> Result<Response, ApiError>;

    /// Issue a POST request with a JSON body
    async fn post(&self, url: &str, body: &Value) -> Result<Response, ApiError>;

    /// Issue a PUT request with a JSON body
    async fn put(&self, url: &str, body: &Value) -> Result<Response, ApiError>;

    /// Issue a DELETE request
    async fn delete(&self, url: &str) -> Result<Response, ApiError>;
}
