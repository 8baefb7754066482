use crate::state::ScratchOperation;
use media_gallery_client::{ApiError, ImageScratch};

/// The user's pending scratch upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageScratchState {
    pub processing: Option<ScratchOperation>,
    pub error: Option<ApiError>,
    pub scratch_image: Option<ImageScratch>,
}
