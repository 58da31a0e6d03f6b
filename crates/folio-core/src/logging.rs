//! Console logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the level passed by the caller
//! (usually `--log-level`) applies to the folio crates and `warn` to the rest.
//!
//! ```ignore
//! folio_core::logging::init("debug")?;
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, FolioResult};

/// Build the filter used by [`init`].
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,folio={level},folio_core={level},folio_ui={level}",
            level = default_level
        ))
    })
}

/// Install the global fmt subscriber.
pub fn init(default_level: &str) -> FolioResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}
