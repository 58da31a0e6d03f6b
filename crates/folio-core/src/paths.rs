//! Image path resolution
//!
//! Turns raw image paths from the site config into `src` values that are
//! safe inside an HTML attribute.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURI`, minus the apostrophe.
///
/// `'` stays in the set so it comes out as `%27` and cannot terminate a
/// single-quoted attribute or CSS `url('…')`.
const SRC_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Maps a raw path to a renderable location (URL or file path).
pub trait PathResolver {
    fn resolve(&self, raw: &str) -> String;
}

/// Prefixes relative paths with a base directory or URL.
///
/// Absolute URLs, data URIs and rooted paths pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePathResolver {
    base: String,
}

impl BasePathResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Resolver rooted at a local directory
    pub fn from_dir(dir: &Path) -> Self {
        Self::new(dir.to_string_lossy().into_owned())
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

fn is_absolute(raw: &str) -> bool {
    raw.starts_with('/')
        || raw.starts_with("data:")
        || raw.contains("://")
}

impl PathResolver for BasePathResolver {
    fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim();
        if self.base.is_empty() || is_absolute(raw) {
            return raw.to_string();
        }
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            raw.trim_start_matches("./")
        )
    }
}

/// Percent-encode a resolved path for use as an `src` attribute.
pub fn encode_src(resolved: &str) -> String {
    utf8_percent_encode(resolved, SRC_ENCODE_SET).to_string()
}

/// Resolve then encode.
pub fn resolve_src(resolver: &dyn PathResolver, raw: &str) -> String {
    encode_src(&resolver.resolve(raw))
}
