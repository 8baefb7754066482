use crate::state::{GalleryListState, ImageInfosState, ImageScratchState};

/// Root state of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub galleries: GalleryListState,
    pub image_infos: ImageInfosState,
    pub image_scratch: ImageScratchState,
}
