//! Actions module
//!
//! Actions are tagged by entity family. Each family follows the same
//! request/terminal vocabulary: a `*Request` action records intent and exactly
//! one `*ResponseOk` or `*ResponseError` action concludes it.

pub mod gallery;
pub mod image_info;
pub mod image_scratch;

pub use gallery::GalleryAction;
pub use image_info::ImageInfoAction;
pub use image_scratch::ImageScratchAction;

/// Root action enum - tagged by entity family
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Gallery collection actions
    Gallery(GalleryAction),
    /// Gallery image actions
    ImageInfo(ImageInfoAction),
    /// Scratch image actions
    ImageScratch(ImageScratchAction),

    /// No-op action
    None,
}

impl From<GalleryAction> for Action {
    fn from(action: GalleryAction) -> Self {
        Action::Gallery(action)
    }
}

impl From<ImageInfoAction> for Action {
    fn from(action: ImageInfoAction) -> Self {
        Action::ImageInfo(action)
    }
}

impl From<ImageScratchAction> for Action {
    fn from(action: ImageScratchAction) -> Self {
        Action::ImageScratch(action)
    }
}
