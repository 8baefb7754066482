use crate::keyed_map::{EntityState, KeyedMap};
use crate::state::{CollectionOperation, EntityOperation};
use media_gallery_client::{ApiError, Gallery, GalleryId};

/// State of one gallery
pub type GalleryEntry = EntityState<Gallery, EntityOperation>;

/// State of all galleries of the user
///
/// `processing`/`error` describe collection operations (list, create);
/// per-gallery update and delete live on each [`GalleryEntry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryListState {
    pub processing: Option<CollectionOperation>,
    pub error: Option<ApiError>,
    pub galleries: KeyedMap<GalleryId, GalleryEntry>,
}
