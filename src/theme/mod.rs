//! Global styling.

mod styles;

pub use styles::GLOBAL_STYLES;
