//! Launch-time state for Folio.
//!
//! The site config and CLI options are parsed once in `main` and read by
//! the root component; everything reactive lives in `folio_ui::context`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use folio_core::SiteConfig;

static SITE: OnceLock<SiteConfig> = OnceLock::new();
static OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();
static INITIAL_GALLERY_TAKEN: AtomicBool = AtomicBool::new(false);

/// CLI options that shape the first render
#[derive(Clone, Debug, Default)]
pub struct LaunchOptions {
    pub suspend_animations: bool,
    pub initial_gallery: Option<String>,
}

/// Store the launch state; later calls are ignored.
pub fn init(site: SiteConfig, options: LaunchOptions) {
    if SITE.set(site).is_err() || OPTIONS.set(options).is_err() {
        tracing::warn!("launch state already initialised");
    }
}

/// Site config; the demo site when `init` was never called.
pub fn site_config() -> &'static SiteConfig {
    SITE.get_or_init(SiteConfig::demo)
}

pub fn launch_options() -> &'static LaunchOptions {
    OPTIONS.get_or_init(LaunchOptions::default)
}

/// The `--gallery` id, handed out once so closing the modal does not
/// reopen it.
pub fn take_initial_gallery() -> Option<String> {
    if INITIAL_GALLERY_TAKEN.swap(true, Ordering::SeqCst) {
        return None;
    }
    launch_options().initial_gallery.clone()
}
