use crate::reducers::image_info_reducer::image_entry;
use crate::state::{CollectionOperation, EntityOperation, ImageInfosState};
use media_gallery_client::{ApiError, GalleryId, ImageId, ImageInfo};

/// Images of a gallery in map order; empty for an unknown gallery
pub fn select_image_infos(state: &ImageInfosState, gallery_id: GalleryId) -> Vec<&ImageInfo> {
    state
        .gallery_images
        .get(gallery_id)
        .map(|g| g.image_infos.values().map(|entry| &entry.payload).collect())
        .unwrap_or_default()
}

pub fn select_image_info(
    state: &ImageInfosState,
    gallery_id: GalleryId,
    image_id: ImageId,
) -> Option<&ImageInfo> {
    image_entry(state, gallery_id, image_id).map(|entry| &entry.payload)
}

pub fn select_image_info_processing(
    state: &ImageInfosState,
    gallery_id: GalleryId,
    image_id: ImageId,
) -> Option<EntityOperation> {
    image_entry(state, gallery_id, image_id).and_then(|entry| entry.processing)
}

pub fn select_image_info_error(
    state: &ImageInfosState,
    gallery_id: GalleryId,
    image_id: ImageId,
) -> Option<&ApiError> {
    image_entry(state, gallery_id, image_id).and_then(|entry| entry.error.as_ref())
}

pub fn select_image_infos_processing(
    state: &ImageInfosState,
    gallery_id: GalleryId,
) -> Option<CollectionOperation> {
    state
        .gallery_images
        .get(gallery_id)
        .and_then(|g| g.processing)
}

pub fn select_image_infos_error(state: &ImageInfosState, gallery_id: GalleryId) -> Option<&ApiError> {
    state
        .gallery_images
        .get(gallery_id)
        .and_then(|g| g.error.as_ref())
}
