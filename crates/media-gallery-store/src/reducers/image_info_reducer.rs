//! Image Info Reducer
//!
//! Two-level state: images are grouped by the gallery they belong to.
//! Collection actions (list, create) upsert the gallery's group; update and
//! delete address a single image inside it.

use crate::actions::ImageInfoAction;
use crate::keyed_map::{EntityState, KeyedMap, Transition};
use crate::state::{
    CollectionOperation, EntityOperation, GalleryImagesState, ImageInfoEntry, ImageInfosState,
};
use media_gallery_client::{GalleryId, ImageId, ImageInfo};

/// Apply an image action to the per-gallery image state
///
/// Only list and create touch a gallery group's `processing` and `error`.
/// Update and delete transitions are recorded on the image entry alone and
/// leave the group status as it was.
pub fn reduce_image_infos(mut state: ImageInfosState, action: &ImageInfoAction) -> ImageInfosState {
    match action {
        ImageInfoAction::ListRequest { gallery_id } => {
            state.gallery_images = upsert_gallery(state.gallery_images, *gallery_id, |mut g| {
                g.processing = Some(CollectionOperation::Fetch);
                g.error = None;
                g.image_infos = KeyedMap::new();
                g
            });
        }

        ImageInfoAction::ListResponseOk {
            gallery_id,
            image_infos,
        } => {
            let group = GalleryImagesState {
                processing: None,
                error: None,
                image_infos: image_infos
                    .iter()
                    .map(|info| (info.id, EntityState::wrap(info.clone())))
                    .collect(),
            };
            state.gallery_images = state.gallery_images.set(*gallery_id, group);
            log::debug!(
                "Loaded {} images for gallery {}",
                image_infos.len(),
                gallery_id
            );
        }

        ImageInfoAction::ListResponseError { gallery_id, error }
        | ImageInfoAction::CreateResponseError { gallery_id, error } => {
            state.gallery_images = upsert_gallery(state.gallery_images, *gallery_id, |mut g| {
                g.processing = None;
                g.error = Some(error.clone());
                g
            });
            log::error!("Image request failed for gallery {}: {}", gallery_id, error);
        }

        ImageInfoAction::CreateRequest { gallery_id, .. } => {
            state.gallery_images = upsert_gallery(state.gallery_images, *gallery_id, |mut g| {
                g.processing = Some(CollectionOperation::Add);
                g.error = None;
                g
            });
        }

        ImageInfoAction::CreateResponseOk {
            gallery_id,
            image_info,
        } => {
            state.gallery_images = upsert_gallery(state.gallery_images, *gallery_id, |mut g| {
                g.processing = None;
                g.error = None;
                g.image_infos = g
                    .image_infos
                    .set(image_info.id, EntityState::wrap(image_info.clone()));
                g
            });
        }

        ImageInfoAction::UpdateRequest {
            gallery_id,
            image_id,
        } => {
            state.gallery_images = transition_image(
                state.gallery_images,
                *gallery_id,
                *image_id,
                Transition::Begin(EntityOperation::Update),
            );
        }

        ImageInfoAction::UpdateResponseOk {
            gallery_id,
            image_info,
        } => {
            // A success carries the payload, so it may create the gallery group
            state.gallery_images = upsert_gallery(state.gallery_images, *gallery_id, |mut g| {
                g.image_infos = g
                    .image_infos
                    .merge_at(image_info.id, Transition::Succeed(image_info.clone()));
                g
            });
        }

        ImageInfoAction::UpdateResponseError {
            gallery_id,
            image_id,
            error,
        }
        | ImageInfoAction::DeleteResponseError {
            gallery_id,
            image_id,
            error,
        } => {
            state.gallery_images = transition_image(
                state.gallery_images,
                *gallery_id,
                *image_id,
                Transition::Fail(error.clone()),
            );
        }

        ImageInfoAction::DeleteRequest {
            gallery_id,
            image_id,
        } => {
            state.gallery_images = transition_image(
                state.gallery_images,
                *gallery_id,
                *image_id,
                Transition::Begin(EntityOperation::Delete),
            );
        }

        ImageInfoAction::DeleteResponseOk {
            gallery_id,
            image_id,
        } => {
            state.gallery_images = state.gallery_images.update(*gallery_id, |mut g| {
                g.image_infos = g.image_infos.remove_at(*image_id);
                g
            });
        }
    }
    state
}

fn upsert_gallery(
    galleries: KeyedMap<GalleryId, GalleryImagesState>,
    gallery_id: GalleryId,
    f: impl FnOnce(GalleryImagesState) -> GalleryImagesState,
) -> KeyedMap<GalleryId, GalleryImagesState> {
    galleries.upsert_with(gallery_id, GalleryImagesState::default, f)
}

/// Status-only transition on one image; unknown galleries are left alone
fn transition_image(
    galleries: KeyedMap<GalleryId, GalleryImagesState>,
    gallery_id: GalleryId,
    image_id: ImageId,
    transition: Transition<ImageInfo, EntityOperation>,
) -> KeyedMap<GalleryId, GalleryImagesState> {
    if !galleries.contains(gallery_id) {
        log::warn!(
            "Ignoring status update for image {} of unknown gallery {}",
            image_id,
            gallery_id
        );
        return galleries;
    }

    galleries.update(gallery_id, |mut g| {
        g.image_infos = g.image_infos.merge_at(image_id, transition);
        g
    })
}

/// Entry for one image, if both the gallery group and the image are known
pub(crate) fn image_entry(
    state: &ImageInfosState,
    gallery_id: GalleryId,
    image_id: ImageId,
) -> Option<&ImageInfoEntry> {
    state
        .gallery_images
        .get(gallery_id)
        .and_then(|g| g.image_infos.get(image_id))
}
