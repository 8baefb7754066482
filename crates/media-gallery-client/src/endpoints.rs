//! Endpoint URLs of the media gallery API
//!
//! Collection endpoints end in `.json`; entity endpoints are suffixed with
//! `/<id>.json`. Every URL carries the user's token as `auth_token` query
//! parameter.

use crate::types::{GalleryId, ImageId};
use url::form_urlencoded;

const GALLERIES_PATH: &str = "/media_gallery/galleries";
const IMAGE_SCRATCHES_PATH: &str = "/media_gallery/image_scratches";

/// Append the encoded auth token to a path
fn with_auth_token(path: String, auth_token: &str) -> String {
    let token: String = form_urlencoded::byte_serialize(auth_token.as_bytes()).collect();
    format!("{path}?auth_token={token}")
}

/// `/media_gallery/galleries.json`
pub fn galleries_url(auth_token: &str) -> String {
    with_auth_token(format!("{GALLERIES_PATH}.json"), auth_token)
}

/// `/media_gallery/galleries/<id>.json`
pub fn gallery_url(auth_token: &str, gallery_id: GalleryId) -> String {
    with_auth_token(format!("{GALLERIES_PATH}/{gallery_id}.json"), auth_token)
}

/// `/media_gallery/galleries/<id>/image_infos.json`
pub fn image_infos_url(auth_token: &str, gallery_id: GalleryId) -> String {
    with_auth_token(
        format!("{GALLERIES_PATH}/{gallery_id}/image_infos.json"),
        auth_token,
    )
}

/// `/media_gallery/galleries/<id>/image_infos/<image id>.json`
pub fn image_info_url(auth_token: &str, gallery_id: GalleryId, image_id: ImageId) -> String {
    with_auth_token(
        format!("{GALLERIES_PATH}/{gallery_id}/image_infos/{image_id}.json"),
        auth_token,
    )
}

/// `/media_gallery/image_scratches.json`
///
/// A user has at most one scratch image, so there is no entity endpoint.
pub fn image_scratches_url(auth_token: &str) -> String {
    with_auth_token(format!("{IMAGE_SCRATCHES_PATH}.json"), auth_token)
}
