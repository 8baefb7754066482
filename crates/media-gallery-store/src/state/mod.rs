//! Application State Module
//!
//! Contains all state types of the store, organized by feature.

mod app;
mod gallery;
mod image_info;
mod image_scratch;
mod operation;

pub use app::AppState;
pub use gallery::{GalleryEntry, GalleryListState};
pub use image_info::{GalleryImagesState, ImageInfoEntry, ImageInfosState};
pub use image_scratch::ImageScratchState;
pub use operation::{CollectionOperation, EntityOperation, ScratchOperation};
