//! Selectors
//!
//! Read-only queries over the state slices. Selectors never fail: an unknown
//! id yields `None` (or an empty list), never a panic.

mod gallery;
mod image_info;
mod image_scratch;

pub use gallery::*;
pub use image_info::*;
pub use image_scratch::*;
