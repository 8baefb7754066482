use crate::keyed_map::{EntityState, KeyedMap};
use crate::state::{CollectionOperation, EntityOperation};
use media_gallery_client::{ApiError, GalleryId, ImageId, ImageInfo};

/// State of one image
pub type ImageInfoEntry = EntityState<ImageInfo, EntityOperation>;

/// Images of one gallery
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryImagesState {
    pub processing: Option<CollectionOperation>,
    pub error: Option<ApiError>,
    pub image_infos: KeyedMap<ImageId, ImageInfoEntry>,
}

/// Images of every gallery seen so far, keyed by gallery id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageInfosState {
    pub gallery_images: KeyedMap<GalleryId, GalleryImagesState>,
}
