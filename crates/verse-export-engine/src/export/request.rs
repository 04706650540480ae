use crate::models::{BibleBook, Notes, Verse};

/// Everything one export renders. Borrowed for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    /// Markdown title, rendered as a level-1 heading.
    pub title: &'a str,
    /// Text module the verses come from; selects the reference separator.
    pub translation_id: &'a str,
    /// Verses sorted by absolute verse number within each book.
    pub verses: &'a [Verse],
    /// Books in output order. `None` renders the verses as one flat block.
    pub books: Option<&'a [BibleBook]>,
    pub notes: &'a Notes,
}

impl<'a> ExportRequest<'a> {
    pub fn new(title: &'a str, translation_id: &'a str, verses: &'a [Verse], notes: &'a Notes) -> Self {
        Self {
            title,
            translation_id,
            verses,
            books: None,
            notes,
        }
    }

    pub fn with_books(mut self, books: &'a [BibleBook]) -> Self {
        self.books = Some(books);
        self
    }
}
