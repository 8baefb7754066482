//! Scratch image actions

use media_gallery_client::{ApiError, ImageScratch};

#[derive(Debug, Clone, PartialEq)]
pub enum ImageScratchAction {
    /// Forget the local scratch state without calling the server
    ReinitLocal,

    CreateRequest,
    CreateResponseOk(ImageScratch),
    CreateResponseError(ApiError),

    DeleteRequest,
    DeleteResponseOk,
    DeleteResponseError(ApiError),
}
