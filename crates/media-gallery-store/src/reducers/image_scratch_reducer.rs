//! Image Scratch Reducer

use crate::actions::ImageScratchAction;
use crate::state::{ImageScratchState, ScratchOperation};

pub fn reduce_image_scratch(
    mut state: ImageScratchState,
    action: &ImageScratchAction,
) -> ImageScratchState {
    match action {
        ImageScratchAction::ReinitLocal => {
            return ImageScratchState::default();
        }

        ImageScratchAction::CreateRequest => {
            state.processing = Some(ScratchOperation::Add);
            state.error = None;
        }

        ImageScratchAction::CreateResponseOk(scratch) => {
            state.processing = None;
            state.scratch_image = Some(scratch.clone());
        }

        ImageScratchAction::DeleteRequest => {
            state.processing = Some(ScratchOperation::Delete);
            state.error = None;
        }

        ImageScratchAction::DeleteResponseOk => {
            state.processing = None;
            state.scratch_image = None;
        }

        ImageScratchAction::CreateResponseError(error)
        | ImageScratchAction::DeleteResponseError(error) => {
            state.processing = None;
            state.error = Some(error.clone());
            log::error!("Scratch image request failed: {}", error);
        }
    }
    state
}
