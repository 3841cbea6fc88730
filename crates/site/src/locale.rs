//! Interface string translation.
//!
//! Loads per-language JSON files into an in-memory cache and provides the
//! translate() lookups used by route handlers and the Tera t() function.
//! Nested objects flatten to dotted keys; arrays flatten to indexed keys so
//! bullet lists can be reassembled with [`LocaleService::translate_list`].

use std::path::Path;

use anyhow::{Context, Result};
use dashmap::DashMap;
use serde::Serialize;
use tracing::info;

/// A site language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// All languages the site serves.
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Short code used in URLs and locale file names.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// BCP 47 tag for the `<html lang>` attribute and hreflang alternates.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh-Hant",
        }
    }

    /// Label shown on the language switcher when this language is the target.
    pub fn switcher_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "中文",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    /// The other site language (used by the header toggle).
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Localize a clean (prefix-free) path for this language.
    ///
    /// The default language carries no prefix so `/about` and `/en/about`
    /// never serve the same page.
    pub fn href(self, path: &str) -> String {
        match self {
            Language::En => path.to_string(),
            Language::Zh => {
                if path == "/" {
                    "/zh".to_string()
                } else {
                    format!("/zh{path}")
                }
            }
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Locale translation service.
pub struct LocaleService {
    default_language: Language,
    /// In-memory translation cache: key = "language\0key" → translation.
    cache: DashMap<String, String>,
}

impl LocaleService {
    /// Load all site languages from `<dir>/<code>.json`.
    pub fn load(dir: &Path, default_language: Language) -> Result<Self> {
        let service = Self {
            default_language,
            cache: DashMap::new(),
        };

        for language in Language::ALL {
            let path = dir.join(format!("{}.json", language.code()));
            let count = service
                .load_language(language, &path)
                .with_context(|| format!("failed to load locale file {}", path.display()))?;
            info!(language = %language, count = count, "loaded locale strings");
        }

        Ok(service)
    }

    /// Load one language file into the cache, returning the string count.
    fn load_language(&self, language: Language, path: &Path) -> Result<usize> {
        let raw = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;

        let mut flattened = Vec::new();
        flatten(String::new(), &value, &mut flattened);

        let count = flattened.len();
        for (key, translation) in flattened {
            self.cache.insert(cache_key(language, &key), translation);
        }
        Ok(count)
    }

    /// Translate a key for the given language.
    ///
    /// Falls back to the default language, then to the key itself, so a
    /// missing string renders visibly rather than as an empty hole.
    pub fn translate(&self, key: &str, language: Language) -> String {
        if let Some(translation) = self.cache.get(&cache_key(language, key)) {
            return translation.clone();
        }

        if language != self.default_language
            && let Some(translation) = self.cache.get(&cache_key(self.default_language, key))
        {
            return translation.clone();
        }

        key.to_string()
    }

    /// Collect an indexed list (`key.0`, `key.1`, …) for the given language.
    ///
    /// Stops at the first missing index; an unknown key yields an empty list.
    pub fn translate_list(&self, key: &str, language: Language) -> Vec<String> {
        let mut items = Vec::new();
        for index in 0.. {
            let item_key = format!("{key}.{index}");
            let has_item = self.cache.contains_key(&cache_key(language, &item_key))
                || self
                    .cache
                    .contains_key(&cache_key(self.default_language, &item_key));
            if !has_item {
                break;
            }
            items.push(self.translate(&item_key, language));
        }
        items
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Number of cached strings across all languages.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Build a cache key from language and flattened string key.
///
/// Uses a null byte separator to prevent collisions with keys that could
/// start with a language code segment.
fn cache_key(language: Language, key: &str) -> String {
    format!("{}\0{}", language.code(), key)
}

/// Flatten a JSON tree into dotted leaf keys.
///
/// Objects nest with `.`, array elements use their index as the segment, and
/// scalar leaves stringify.
fn flatten(prefix: String, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child_prefix, child, out);
            }
        }
        serde_json::Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(format!("{prefix}.{index}"), child, out);
            }
        }
        serde_json::Value::String(s) => out.push((prefix, s.clone())),
        serde_json::Value::Number(n) => out.push((prefix, n.to_string())),
        serde_json::Value::Bool(b) => out.push((prefix, b.to_string())),
        serde_json::Value::Null => {}
    }
}

#[cfg(test)]
impl LocaleService {
    /// An empty service where every lookup falls back to the key itself.
    pub(crate) fn empty_for_tests(default_language: Language) -> Self {
        Self {
            default_language,
            cache: DashMap::new(),
        }
    }
}

impl std::fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleService")
            .field("default_language", &self.default_language)
            .field("cache_size", &self.cache.len())
            .finish()
    }
}
