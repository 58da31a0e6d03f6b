//! Route targets.

mod home;

pub use home::{Gallery, Home, Portfolio};
