//! Grouping of verse lists into contiguous display blocks.

use crate::models::{BibleBook, Verse};

/// A run of verses rendered under one reference header.
///
/// Blocks produced by [`segment`] are contiguous by absolute verse number and
/// never span books. The only empty block is the degenerate result of
/// segmenting an empty list, which renders as nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseBlock<'a> {
    verses: Vec<&'a Verse>,
}

impl<'a> VerseBlock<'a> {
    pub fn new(verses: Vec<&'a Verse>) -> Self {
        Self { verses }
    }

    pub fn verses(&self) -> &[&'a Verse] {
        &self.verses
    }

    pub fn first(&self) -> Option<&'a Verse> {
        self.verses.first().copied()
    }

    pub fn last(&self) -> Option<&'a Verse> {
        self.verses.last().copied()
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Whether consecutive verses differ by exactly one absolute verse number.
    pub fn is_contiguous(&self) -> bool {
        self.verses
            .windows(2)
            .all(|pair| pair[1].absolute_verse_nr == pair[0].absolute_verse_nr + 1)
    }

    fn push(&mut self, verse: &'a Verse) {
        self.verses.push(verse);
    }
}

impl<'a> FromIterator<&'a Verse> for VerseBlock<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Verse>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Splits `verses` into contiguous blocks, keeping input order.
///
/// With a `book`, only that book's verses are considered. Input is expected
/// sorted by absolute verse number; it is never re-sorted here. The open block
/// is always flushed at the end, so an empty input yields one empty block.
pub fn segment<'a>(verses: &'a [Verse], book: Option<&BibleBook>) -> Vec<VerseBlock<'a>> {
    let mut blocks = Vec::new();
    let mut current = VerseBlock::default();
    let mut last_verse_nr = 0u32;

    for verse in verses
        .iter()
        .filter(|verse| book.is_none_or(|book| verse.belongs_to(book)))
    {
        if verse.absolute_verse_nr > last_verse_nr.saturating_add(1) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }

        current.push(verse);
        last_verse_nr = verse.absolute_verse_nr;
    }

    blocks.push(current);
    blocks
}
