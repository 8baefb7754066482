//! Gallery Reducer
//!
//! Handles the gallery collection state using tagged GalleryAction.
//!
//! List and create drive the collection-level status; update and delete only
//! touch the targeted gallery's entry.

use crate::actions::GalleryAction;
use crate::keyed_map::{EntityState, KeyedMap, Transition};
use crate::state::{CollectionOperation, EntityOperation, GalleryListState};

pub fn reduce_galleries(mut state: GalleryListState, action: &GalleryAction) -> GalleryListState {
    match action {
        GalleryAction::ListRequest => {
            state.processing = Some(CollectionOperation::Fetch);
            state.error = None;
            state.galleries = KeyedMap::new();
        }

        GalleryAction::ListResponseOk(galleries) => {
            state.processing = None;
            state.galleries = galleries
                .iter()
                .map(|gallery| (gallery.id, EntityState::wrap(gallery.clone())))
                .collect();
            log::debug!("Loaded {} galleries", galleries.len());
        }

        GalleryAction::ListResponseError(error) => {
            // A failed refresh leaves no trustworthy list, so drop the old one
            state.processing = None;
            state.error = Some(error.clone());
            state.galleries = KeyedMap::new();
            log::error!("Failed to load galleries: {}", error);
        }

        GalleryAction::CreateRequest { .. } => {
            state.processing = Some(CollectionOperation::Add);
            state.error = None;
        }

        GalleryAction::CreateResponseOk(gallery) => {
            state.processing = None;
            state.error = None;
            state.galleries = state
                .galleries
                .set(gallery.id, EntityState::wrap(gallery.clone()));
        }

        GalleryAction::CreateResponseError(error) => {
            // Existing galleries are unaffected by a failed creation
            state.processing = None;
            state.error = Some(error.clone());
            log::error!("Failed to create gallery: {}", error);
        }

        GalleryAction::UpdateRequest(gallery_id) => {
            state.galleries = state
                .galleries
                .merge_at(*gallery_id, Transition::Begin(EntityOperation::Update));
        }

        GalleryAction::UpdateResponseOk(gallery) => {
            state.galleries = state
                .galleries
                .merge_at(gallery.id, Transition::Succeed(gallery.clone()));
        }

        GalleryAction::UpdateResponseError { gallery_id, error } => {
            state.galleries = state
                .galleries
                .merge_at(*gallery_id, Transition::Fail(error.clone()));
        }

        GalleryAction::DeleteRequest(gallery_id) => {
            state.galleries = state
                .galleries
                .merge_at(*gallery_id, Transition::Begin(EntityOperation::Delete));
        }

        GalleryAction::DeleteResponseOk(gallery_id) => {
            state.galleries = state.galleries.remove_at(*gallery_id);
        }

        GalleryAction::DeleteResponseError { gallery_id, error } => {
            state.galleries = state
                .galleries
                .merge_at(*gallery_id, Transition::Fail(error.clone()));
        }
    }
    state
}
