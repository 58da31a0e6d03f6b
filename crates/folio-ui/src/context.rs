//! Shared services provided by the host application.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! provide_folio_context(FolioContext::new(language, resolver, false));
//!
//! // In child components
//! let viewport = use_viewport();
//! let resolver = use_path_resolver();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Language, Notifications, PathResolver, Viewport};

/// Path resolver shared through context.
#[derive(Clone)]
pub struct SharedResolver(pub Rc<dyn PathResolver>);

impl SharedResolver {
    pub fn new(resolver: impl PathResolver + 'static) -> Self {
        Self(Rc::new(resolver))
    }

    /// Resolved location, unencoded (for opening files)
    pub fn resolve(&self, raw: &str) -> String {
        self.0.resolve(raw)
    }

    /// Resolve and encode for an `src` attribute
    pub fn src(&self, raw: &str) -> String {
        folio_core::resolve_src(self.0.as_ref(), raw)
    }
}

/// Display settings that do not change while the app runs
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplaySettings {
    /// Reduced-motion mode: no typewriter, no avatar rotation
    pub suspend_animations: bool,
}

/// Everything [`provide_folio_context`] installs.
pub struct FolioContext {
    pub language: Language,
    pub resolver: SharedResolver,
    pub settings: DisplaySettings,
}

impl FolioContext {
    pub fn new(language: Language, resolver: SharedResolver, suspend_animations: bool) -> Self {
        Self {
            language,
            resolver,
            settings: DisplaySettings { suspend_animations },
        }
    }
}

/// Install the Folio services for the current subtree.
///
/// Call once, from the root component.
pub fn provide_folio_context(ctx: FolioContext) {
    use_context_provider(|| Signal::new(Viewport::default()));
    use_context_provider(|| Signal::new(Notifications::new()));
    use_context_provider(|| Signal::new(ctx.language));
    use_context_provider(|| ctx.resolver);
    use_context_provider(|| ctx.settings);
}

/// Current viewport; the root element updates it on resize.
pub fn use_viewport() -> Signal<Viewport> {
    use_context::<Signal<Viewport>>()
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

pub fn use_path_resolver() -> SharedResolver {
    use_context::<SharedResolver>()
}

pub fn use_display_settings() -> DisplaySettings {
    use_context::<DisplaySettings>()
}
