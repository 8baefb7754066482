use crate::state::{ImageScratchState, ScratchOperation};
use media_gallery_client::{ApiError, ImageScratch};

pub fn select_scratch_image(state: &ImageScratchState) -> Option<&ImageScratch> {
    state.scratch_image.as_ref()
}

pub fn select_scratch_processing(state: &ImageScratchState) -> Option<ScratchOperation> {
    state.processing
}

pub fn select_scratch_error(state: &ImageScratchState) -> Option<&ApiError> {
    state.error.as_ref()
}
