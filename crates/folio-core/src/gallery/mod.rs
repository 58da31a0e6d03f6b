//! Gallery model, layout policy and image-load tracking.

pub mod layout;
pub mod target;
pub mod tracker;

pub use layout::{select_layout, Direction, LayoutParameters, LayoutPreset};
pub use target::GalleryTarget;
pub use tracker::{Generation, LoadTracker};
