//! Localised string lookup
//!
//! Strings live in per-language tables (`{"en": {...}, "fr": {...}}`).
//! Lookups try the selected language, then the fallback language, then the
//! caller's default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language used when a key is missing from the selected one
pub const FALLBACK_LANGUAGE: &str = "en";

/// Language code -> key -> value
pub type Locales = BTreeMap<String, BTreeMap<String, Value>>;

/// Text that is either the same in every language or given per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    PerLanguage(BTreeMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl LocalizedText {
    /// Pick the variant for `language`, falling back to English and then to
    /// any available entry.
    pub fn get(&self, language: &str) -> Option<&str> {
        match self {
            LocalizedText::Plain(text) if text.is_empty() => None,
            LocalizedText::Plain(text) => Some(text),
            LocalizedText::PerLanguage(map) => map
                .get(language)
                .or_else(|| map.get(FALLBACK_LANGUAGE))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }
}

/// Selected language plus the site-wide string table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Language {
    selected: String,
    strings: Locales,
}

impl Language {
    pub fn new(selected: impl Into<String>, strings: Locales) -> Self {
        Self {
            selected: selected.into(),
            strings,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn set_selected(&mut self, language: impl Into<String>) {
        self.selected = language.into();
        tracing::debug!(language = %self.selected, "language selected");
    }

    /// Languages present in the site-wide table
    pub fn available(&self) -> Vec<String> {
        self.strings.keys().cloned().collect()
    }

    /// Look `key` up in a component's own locale table.
    pub fn get_translation<'a>(&self, locales: &'a Locales, key: &str) -> Option<&'a Value> {
        locales
            .get(&self.selected)
            .and_then(|table| table.get(key))
            .or_else(|| locales.get(FALLBACK_LANGUAGE).and_then(|table| table.get(key)))
            .filter(|value| !value.is_null())
    }

    /// String-valued translation; empty strings count as missing.
    pub fn get_translated_string(&self, locales: &Locales, key: &str) -> Option<String> {
        self.get_translation(locales, key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// List-valued translation; non-string items are skipped.
    pub fn get_translated_strings(&self, locales: &Locales, key: &str) -> Vec<String> {
        match self.get_translation(locales, key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(single)) if !single.is_empty() => vec![single.clone()],
            _ => Vec::new(),
        }
    }

    /// Site-wide UI string; the key itself is returned when missing so a
    /// gap in the table is visible rather than blank.
    pub fn get_string(&self, key: &str) -> String {
        self.get_translated_string(&self.strings, key)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn parse_localized(&self, text: &LocalizedText) -> Option<String> {
        text.get(&self.selected).map(str::to_string)
    }
}
