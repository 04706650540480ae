use crate::{blocks::VerseBlock, models::Verse};

/// Formats verse references with a locale-specific chapter/verse separator.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFormatter<'s> {
    separator: &'s str,
}

impl<'s> ReferenceFormatter<'s> {
    pub fn new(separator: &'s str) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> &str {
        self.separator
    }

    /// Header fragments for a block, each meant to be appended as its own run.
    ///
    /// `John 3:16-17` comes out as `["John", " 3:16", "-17"]`; a range crossing
    /// a chapter as `["John", " 3:16", " - 4:2"]`. A missing `book_title` drops
    /// only the first fragment. An empty block has no header.
    pub fn block_header(&self, book_title: Option<&str>, block: &VerseBlock<'_>) -> Vec<String> {
        let (Some(first), Some(last)) = (block.first(), block.last()) else {
            return Vec::new();
        };

        let mut fragments = Vec::with_capacity(3);
        if let Some(title) = book_title {
            fragments.push(title.to_string());
        }
        fragments.push(format!(" {}", self.chapter_verse(first)));

        if block.len() >= 2 {
            if last.chapter == first.chapter {
                fragments.push(format!("-{}", last.verse_nr));
            } else {
                fragments.push(format!(" - {}", self.chapter_verse(last)));
            }
        }

        fragments
    }

    /// Label of the superscript verse number.
    pub fn verse_label(&self, verse: &Verse) -> String {
        verse.verse_nr.to_string()
    }

    fn chapter_verse(&self, verse: &Verse) -> String {
        format!("{}{}{}", verse.chapter, self.separator, verse.verse_nr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn john(absolute: u32, chapter: u32, verse: u32) -> Verse {
        Verse::new("John", absolute, chapter, verse, "")
    }

    #[rstest]
    #[case::same_chapter(vec![john(26137, 3, 16), john(26138, 3, 17)], ":", "John 3:16-17")]
    #[case::cross_chapter(vec![john(26150, 3, 36), john(26151, 4, 1), john(26152, 4, 2)], ":", "John 3:36 - 4:2")]
    #[case::single_verse(vec![john(26137, 3, 16)], ":", "John 3:16")]
    #[case::comma_separator(vec![john(26137, 3, 16), john(26138, 3, 17)], ",", "John 3,16-17")]
    fn test_block_header(#[case] verses: Vec<Verse>, #[case] separator: &str, #[case] expected: &str) {
        let block: VerseBlock<'_> = verses.iter().collect();
        let formatter = ReferenceFormatter::new(separator);

        let header = formatter.block_header(Some("John"), &block);

        assert_eq!(header.concat(), expected);
    }

    #[test]
    fn test_header_fragments_are_separate_runs() {
        let verses = [john(26137, 3, 16), john(26138, 4, 2)];
        let block: VerseBlock<'_> = verses.iter().collect();

        let header = ReferenceFormatter::new(":").block_header(Some("John"), &block);

        assert_eq!(header, vec!["John", " 3:16", " - 4:2"]);
    }

    #[test]
    fn test_missing_title_keeps_reference() {
        let verses = [john(26137, 3, 16)];
        let block: VerseBlock<'_> = verses.iter().collect();

        let header = ReferenceFormatter::new(":").block_header(None, &block);

        assert_eq!(header, vec![" 3:16"]);
    }

    #[test]
    fn test_empty_block_has_no_header() {
        let header = ReferenceFormatter::new(":").block_header(Some("John"), &VerseBlock::default());
        assert!(header.is_empty());
    }

    #[test]
    fn test_verse_label() {
        assert_eq!(ReferenceFormatter::new(":").verse_label(&john(1, 1, 7)), "7");
    }
}
