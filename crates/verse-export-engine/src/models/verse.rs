use serde::{Deserialize, Serialize};

use super::{BibleBook, note::book_reference_id};

/// A verse handed over by the text module. Read-only to the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    #[serde(alias = "bibleBookShortTitle")]
    pub book_short_title: String,
    /// Position of the verse across the whole canon; consecutive verses differ by one.
    pub absolute_verse_nr: u32,
    pub chapter: u32,
    pub verse_nr: u32,
    /// Verse body markup. May contain annotation containers that are not exported.
    pub content: String,
}

impl Verse {
    pub fn new(
        book_short_title: impl Into<String>,
        absolute_verse_nr: u32,
        chapter: u32,
        verse_nr: u32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            book_short_title: book_short_title.into(),
            absolute_verse_nr,
            chapter,
            verse_nr,
            content: content.into(),
        }
    }

    pub fn belongs_to(&self, book: &BibleBook) -> bool {
        self.book_short_title == book.short_title
    }

    /// Reference id of the book this verse belongs to.
    pub fn book_reference_id(&self) -> String {
        book_reference_id(&self.book_short_title)
    }

    /// Reference id of this verse: `<book>-<absolute verse nr>`.
    pub fn reference_id(&self) -> String {
        format!("{}-{}", self.book_reference_id(), self.absolute_verse_nr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ids() {
        let verse = Verse::new("John", 26137, 3, 16, "");
        assert_eq!(verse.book_reference_id(), "john");
        assert_eq!(verse.reference_id(), "john-26137");
    }

    #[test]
    fn test_belongs_to_matches_short_title_exactly() {
        let verse = Verse::new("John", 1, 1, 1, "");
        assert!(verse.belongs_to(&BibleBook::new("John", "Gospel of John")));
        assert!(!verse.belongs_to(&BibleBook::new("1John", "First Epistle of John")));
    }

    #[test]
    fn test_deserialize_accepts_upstream_field_name() {
        let json = r#"{
            "bibleBookShortTitle": "Gen",
            "absoluteVerseNr": 1,
            "chapter": 1,
            "verseNr": 1,
            "content": "<span>In the beginning</span>"
        }"#;
        let verse: Verse = serde_json::from_str(json).unwrap();
        assert_eq!(verse.book_short_title, "Gen");
        assert_eq!(verse.content, "<span>In the beginning</span>");
    }
}
