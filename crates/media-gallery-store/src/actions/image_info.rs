//! Gallery image actions
//!
//! Every action carries the id of the gallery the image belongs to.

use media_gallery_client::{ApiError, GalleryId, ImageId, ImageInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum ImageInfoAction {
    ListRequest {
        gallery_id: GalleryId,
    },
    ListResponseOk {
        gallery_id: GalleryId,
        image_infos: Vec<ImageInfo>,
    },
    ListResponseError {
        gallery_id: GalleryId,
        error: ApiError,
    },

    CreateRequest {
        gallery_id: GalleryId,
        name: String,
        description: Option<String>,
    },
    CreateResponseOk {
        gallery_id: GalleryId,
        image_info: ImageInfo,
    },
    CreateResponseError {
        gallery_id: GalleryId,
        error: ApiError,
    },

    UpdateRequest {
        gallery_id: GalleryId,
        image_id: ImageId,
    },
    UpdateResponseOk {
        gallery_id: GalleryId,
        image_info: ImageInfo,
    },
    UpdateResponseError {
        gallery_id: GalleryId,
        image_id: ImageId,
        error: ApiError,
    },

    DeleteRequest {
        gallery_id: GalleryId,
        image_id: ImageId,
    },
    DeleteResponseOk {
        gallery_id: GalleryId,
        image_id: ImageId,
    },
    DeleteResponseError {
        gallery_id: GalleryId,
        image_id: ImageId,
        error: ApiError,
    },
}
