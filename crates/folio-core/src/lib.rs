//! Folio Core Library
//!
//! UI-independent state for the Folio portfolio viewer.
//!
//! ## Overview
//!
//! - [`gallery`]: gallery targets, layout selection and the image-load
//!   tracker that gates the gallery spinner
//! - [`paths`]: image path resolution and attribute-safe encoding
//! - [`viewport`]: breakpoint queries
//! - [`profile`] / [`language`]: the localised profile card view
//! - [`avatar`] / [`typewriter`]: timed effects on the profile card
//! - [`notifications`]: toast queue
//! - [`config`]: site configuration file
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::gallery::{select_layout, Direction, LoadTracker};
//! use folio_core::SiteConfig;
//!
//! let site = SiteConfig::demo();
//! let target = site.gallery("dashboard").unwrap();
//!
//! let layout = select_layout(target.kind.as_deref(), true);
//! assert_eq!(layout.direction, Direction::Vertical);
//!
//! let mut tracker = LoadTracker::new();
//! let generation = tracker.reset(Some(target.images.as_slice()));
//! for index in 0..target.len() {
//!     tracker.mark_complete(generation, index);
//! }
//! assert!(tracker.is_ready());
//! ```

pub mod avatar;
pub mod config;
pub mod error;
pub mod gallery;
pub mod language;
pub mod logging;
pub mod notifications;
pub mod paths;
pub mod profile;
pub mod typewriter;
pub mod viewport;

// Re-exports
pub use avatar::{avatar_sources, AvatarRotator, AVATAR_ROTATION_INTERVAL};
pub use config::{GalleryEntry, SiteConfig};
pub use error::{FolioError, FolioResult};
pub use gallery::{select_layout, Direction, GalleryTarget, Generation, LayoutParameters, LoadTracker};
pub use language::{Language, LocalizedText, Locales};
pub use notifications::{Notification, NotificationKind, Notifications};
pub use paths::{encode_src, resolve_src, BasePathResolver, PathResolver};
pub use profile::{Profile, ProfileView, ResumeAction, RoleDisplay, StatusCircleSize};
pub use typewriter::Typewriter;
pub use viewport::{Breakpoint, Viewport};
