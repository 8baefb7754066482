//! Media gallery API data transfer objects
//!
//! These types mirror the JSON the server sends (camelCase keys). They are
//! plain values: the store replaces them wholesale, never mutates them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Server id of a gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(pub u64);

/// Server id of an image within a gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u64);

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An image gallery owned by the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    /// Gallery id
    pub id: GalleryId,

    /// Display name, unique per user
    pub name: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of images in the gallery
    #[serde(default)]
    pub nb_images: u64,

    /// Creation timestamp as sent by the server (older servers send `createdAt`)
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    /// Last update timestamp as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
}

impl Gallery {
    /// Minimal gallery with an id and a name
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: GalleryId(id),
            name: name.into(),
            description: None,
            nb_images: 0,
            created_on: None,
            updated_on: None,
        }
    }
}

/// An image stored in a gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    /// Image id
    pub id: ImageId,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// URL of the original upload
    #[serde(default)]
    pub original_url: String,

    #[serde(default)]
    pub created_on: Option<String>,

    #[serde(default)]
    pub updated_on: Option<String>,

    /// Resized renditions; their shape is server-defined and kept verbatim
    #[serde(default)]
    pub variants: Vec<Value>,
}

impl ImageInfo {
    /// Minimal image with an id and a name
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ImageId(id),
            name: name.into(),
            description: None,
            original_url: String::new(),
            created_on: None,
            updated_on: None,
            variants: Vec::new(),
        }
    }
}

/// A temporary image upload, later attached to a gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageScratch {
    pub id: u64,

    /// Remaining fields of the server response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
