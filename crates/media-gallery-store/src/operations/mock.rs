//! In-memory communicator for operation tests

use crate::actions::Action;
use async_trait::async_trait;
use media_gallery_client::{ApiError, Communicator, Response};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

struct Route {
    method: &'static str,
    url: String,
    body: Option<Value>,
    reply: Result<Response, ApiError>,
}

/// Answers requests matching method + URL (+ body when given); anything else
/// gets a 404
#[derive(Clone, Default)]
pub struct MockCommunicator {
    routes: Arc<Mutex<Vec<Route>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockCommunicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        self,
        method: &'static str,
        url: impl Into<String>,
        body: Option<Value>,
        reply: Result<Response, ApiError>,
    ) -> Self {
        self.routes.lock().unwrap().push(Route {
            method,
            url: url.into(),
            body,
            reply,
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, method: &'static str, url: &str, body: Option<&Value>) -> Result<Response, ApiError> {
        self.calls.lock().unwrap().push(Call {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });

        self.routes
            .lock()
            .unwrap()
            .iter()
            .find(|route| {
                route.method == method
                    && route.url == url
                    && route.body.as_ref().is_none_or(|expected| Some(expected) == body)
            })
            .map(|route| route.reply.clone())
            .unwrap_or_else(|| {
                Err(ApiError::Status {
                    status: 404,
                    message: format!("no route for {method} {url}"),
                })
            })
    }
}

#[async_trait]
impl Communicator for MockCommunicator {
    async fn get(&self, url: &str) -> Result<Response, ApiError> {
        self.answer("GET", url, None)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Response, ApiError> {
        self.answer("POST", url, Some(body))
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Response, ApiError> {
        self.answer("PUT", url, Some(body))
    }

    async fn delete(&self, url: &str) -> Result<Response, ApiError> {
        self.answer("DELETE", url, None)
    }
}

/// Everything queued on the receiver so far
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}

pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}
