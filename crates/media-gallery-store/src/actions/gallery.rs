//! Gallery collection actions

use media_gallery_client::{ApiError, Gallery, GalleryId};

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    // Listing
    /// Start fetching all galleries of the user
    ListRequest,
    /// Galleries fetched; replaces the whole collection
    ListResponseOk(Vec<Gallery>),
    /// Fetching galleries failed
    ListResponseError(ApiError),

    // Creation
    /// Start creating a gallery
    CreateRequest {
        name: String,
        description: Option<String>,
    },
    /// Gallery created (as returned by the server)
    CreateResponseOk(Gallery),
    /// Creating the gallery failed
    CreateResponseError(ApiError),

    // Update
    /// Start updating a gallery
    UpdateRequest(GalleryId),
    /// Gallery updated (as returned by the server)
    UpdateResponseOk(Gallery),
    /// Updating the gallery failed
    UpdateResponseError {
        gallery_id: GalleryId,
        error: ApiError,
    },

    // Deletion
    /// Start deleting a gallery
    DeleteRequest(GalleryId),
    /// Gallery deleted
    DeleteResponseOk(GalleryId),
    /// Deleting the gallery failed
    DeleteResponseError {
        gallery_id: GalleryId,
        error: ApiError,
    },
}
