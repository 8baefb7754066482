use crate::state::{CollectionOperation, EntityOperation, GalleryListState};
use media_gallery_client::{ApiError, Gallery, GalleryId};
use std::collections::HashMap;

/// All galleries, in map order
pub fn select_galleries(state: &GalleryListState) -> Vec<&Gallery> {
    state.galleries.values().map(|entry| &entry.payload).collect()
}

/// Galleries indexed by id
pub fn select_galleries_by_id(state: &GalleryListState) -> HashMap<GalleryId, &Gallery> {
    state
        .galleries
        .values()
        .map(|entry| (entry.payload.id, &entry.payload))
        .collect()
}

/// Galleries indexed by name; with duplicate names the later gallery wins
pub fn select_galleries_by_name(state: &GalleryListState) -> HashMap<&str, &Gallery> {
    state
        .galleries
        .values()
        .map(|entry| (entry.payload.name.as_str(), &entry.payload))
        .collect()
}

pub fn select_gallery_with_id(state: &GalleryListState, gallery_id: GalleryId) -> Option<&Gallery> {
    state.galleries.get(gallery_id).map(|entry| &entry.payload)
}

/// First gallery with the given name; `None` for a missing or empty name
pub fn select_gallery_with_name<'a>(
    state: &'a GalleryListState,
    name: Option<&str>,
) -> Option<&'a Gallery> {
    let name = name.filter(|n| !n.is_empty())?;
    state
        .galleries
        .values()
        .map(|entry| &entry.payload)
        .find(|gallery| gallery.name == name)
}

pub fn select_gallery_processing(
    state: &GalleryListState,
    gallery_id: GalleryId,
) -> Option<EntityOperation> {
    state.galleries.get(gallery_id).and_then(|entry| entry.processing)
}

pub fn select_gallery_error(state: &GalleryListState, gallery_id: GalleryId) -> Option<&ApiError> {
    state
        .galleries
        .get(gallery_id)
        .and_then(|entry| entry.error.as_ref())
}

pub fn select_gallery_list_processing(state: &GalleryListState) -> Option<CollectionOperation> {
    state.processing
}

pub fn select_gallery_list_error(state: &GalleryListState) -> Option<&ApiError> {
    state.error.as_ref()
}
