use serde::{Deserialize, Serialize};

use super::note::book_reference_id;

/// A book of the canon, as listed for a grouped export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleBook {
    /// Key matched against [`Verse::book_short_title`](super::Verse).
    pub short_title: String,
    /// Translatable key of the full book title.
    pub long_title: String,
}

impl BibleBook {
    pub fn new(short_title: impl Into<String>, long_title: impl Into<String>) -> Self {
        Self {
            short_title: short_title.into(),
            long_title: long_title.into(),
        }
    }

    /// Reference id under which a note for the whole book is stored.
    pub fn reference_id(&self) -> String {
        book_reference_id(&self.short_title)
    }
}
