//! HTTP communicator for the media gallery API
//!
//! This crate provides the transport seam used by the gallery store: a
//! trait-based communicator with a `reqwest` implementation, the JSON wire
//! types exchanged with the server, and the endpoint URLs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Communicator trait                  │
//! │  - get(url)          - put(url, body)            │
//! │  - post(url, body)   - delete(url)               │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────────┐      ┌─────────────────────┐
//! │ ReqwestCommunicator │      │ test doubles        │
//! │ (real HTTP)         │      │ (in-memory routes)  │
//! └─────────────────────┘      └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use media_gallery_client::{endpoints, Communicator, ReqwestCommunicator};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), media_gallery_client::ApiError> {
//! let communicator = ReqwestCommunicator::new("https://photos.example.com", Duration::from_secs(30))?;
//! let response = communicator.get(&endpoints::galleries_url("atoken")).await?;
//! println!("{}", response.data);
//! # Ok(())
//! # }
//! ```

pub mod communicator;
pub mod endpoints;
pub mod error;
pub mod reqwest_communicator;
pub mod types;

pub use communicator::{Communicator, Response};
pub use error::ApiError;
pub use reqwest_communicator::ReqwestCommunicator;
pub use types::{Gallery, GalleryId, ImageId, ImageInfo, ImageScratch};
