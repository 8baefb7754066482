//! Async operations against the media gallery API
//!
//! Every operation is two-phase: it dispatches a `*Request` action, awaits
//! the HTTP call, then dispatches exactly one terminal action. Failures are
//! reported through the terminal `*ResponseError` action; operations never
//! return errors to the caller.

mod galleries;
mod image_infos;
mod image_scratches;

#[cfg(test)]
pub(crate) mod mock;

use media_gallery_client::{ApiError, Communicator, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Entry point for all server calls, holding the injected communicator
#[derive(Clone)]
pub struct GalleryOperations {
    communicator: Arc<dyn Communicator>,
}

impl GalleryOperations {
    pub fn new(communicator: Arc<dyn Communicator>) -> Self {
        Self { communicator }
    }
}

impl std::fmt::Debug for GalleryOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryOperations").finish_non_exhaustive()
    }
}

/// Body shared by gallery and image create/update requests
fn name_description_body(name: &str, description: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": description,
    })
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(serde_json::from_value(response.data)?)
}

impl GalleryOperations {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        decode(self.communicator.get(url).await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        decode(self.communicator.post(url, body).await?)
    }

    async fn put_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        decode(self.communicator.put(url, body).await?)
    }

    /// DELETE whose response body is ignored
    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.communicator.delete(url).await.map(|_| ())
    }
}
