use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Localisation lookups the exporter awaits while rendering.
///
/// A `None` answer is not an error: the exporter omits the value (book titles)
/// or falls back to its configured default (separators).
#[async_trait]
pub trait Translations: Send + Sync {
    /// Translated title for a book's long-title key.
    async fn book_title(&self, long_title_key: &str) -> Option<String>;

    /// Chapter/verse separator used by a text module, e.g. `:` or `,`.
    async fn reference_separator(&self, translation_id: &str) -> Option<String>;
}

/// Lookup tables for callers that resolve translations up front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticTranslations {
    #[serde(default)]
    pub book_titles: HashMap<String, String>,
    #[serde(default)]
    pub separators: HashMap<String, String>,
}

impl StaticTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book_title(mut self, long_title_key: impl Into<String>, title: impl Into<String>) -> Self {
        self.book_titles.insert(long_title_key.into(), title.into());
        self
    }

    pub fn with_separator(mut self, translation_id: impl Into<String>, separator: impl Into<String>) -> Self {
        self.separators.insert(translation_id.into(), separator.into());
        self
    }
}

#[async_trait]
impl Translations for StaticTranslations {
    async fn book_title(&self, long_title_key: &str) -> Option<String> {
        self.book_titles.get(long_title_key).cloned()
    }

    async fn reference_separator(&self, translation_id: &str) -> Option<String> {
        self.separators.get(translation_id).cloned()
    }
}
