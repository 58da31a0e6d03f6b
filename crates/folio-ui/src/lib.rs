//! Folio UI Components
//!
//! Dioxus components for the Folio portfolio viewer. State lives in
//! `folio-core`; these components render it and feed user and image events
//! back in.
//!
//! Components read shared services from context (see [`context`]): the
//! host must provide them before rendering anything from this crate.

pub mod components;
pub mod context;

pub use components::*;
pub use context::*;
