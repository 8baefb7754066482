//! Reducers
//!
//! Pure functions `(state, action) -> state`. Each entity family has its own
//! sub-reducer; [`reduce`] routes a root [`Action`](crate::actions::Action)
//! to the one that owns it.

mod app_reducer;
pub mod gallery_reducer;
pub mod image_info_reducer;
pub mod image_scratch_reducer;

pub use app_reducer::reduce;
pub use gallery_reducer::reduce_galleries;
pub use image_info_reducer::reduce_image_infos;
pub use image_scratch_reducer::reduce_image_scratch;
