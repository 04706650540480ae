//! # Document Assembly
//!
//! [`VerseExporter::render`] writes one export to a [`DocumentSink`]:
//!
//! 1. the title as a level-1 markdown heading, then a line break
//! 2. per book, in list order: the translated title in bold, every verse block
//!    of that book, then a line break
//! 3. without books: all verses as a single block, without a reference header
//!
//! An export without verses stops after the title.
//!
//! A block is its reference header (book mode only), the book note the first
//! time that book is seen, and each verse as superscript number + body text,
//! followed by the verse note if there is one.
//!
//! Translation lookups are the only suspension points. They are awaited in
//! order, so books always come out in the order they were given.

mod options;
mod request;

pub use options::RenderOptions;
pub use request::ExportRequest;

use std::collections::HashSet;

use crate::{
    blocks::{VerseBlock, segment},
    error::{ExportError, SinkError},
    markdown::MarkdownConverter,
    models::{Note, Notes},
    reference::ReferenceFormatter,
    sanitize::VerseSanitizer,
    sink::DocumentSink,
    style::RunStyle,
    translations::Translations,
};

/// Renders verse exports through a translation service.
pub struct VerseExporter<'t> {
    translations: &'t dyn Translations,
    converter: MarkdownConverter,
    sanitizer: VerseSanitizer,
    notes_style: RunStyle,
    default_separator: String,
}

impl<'t> VerseExporter<'t> {
    pub fn new(translations: &'t dyn Translations, options: RenderOptions) -> Self {
        let notes_style = options
            .notes_color
            .map(RunStyle::colored)
            .unwrap_or_default();

        Self {
            translations,
            converter: MarkdownConverter::new(options.heading_base_size),
            sanitizer: VerseSanitizer::new(options.excluded_tag),
            notes_style,
            default_separator: options.default_separator,
        }
    }

    /// Renders `request` into `sink`. Sink errors abort the export unchanged.
    pub async fn render(
        &self,
        request: &ExportRequest<'_>,
        sink: &mut dyn DocumentSink,
    ) -> Result<(), ExportError> {
        log::info!(
            "Exporting {} verse(s) in {} book(s)",
            request.verses.len(),
            request.books.map_or(0, <[_]>::len)
        );

        self.converter
            .convert(&format!("# {}", request.title), &RunStyle::default(), sink)?;
        sink.append_line_break()?;

        if request.verses.is_empty() {
            log::debug!("No verses to export, title only");
            return Ok(());
        }

        let separator = match self
            .translations
            .reference_separator(request.translation_id)
            .await
        {
            Some(separator) => separator,
            None => {
                log::debug!(
                    "No reference separator for {}, using {:?}",
                    request.translation_id,
                    self.default_separator
                );
                self.default_separator.clone()
            }
        };

        let mut writer = BlockWriter {
            converter: &self.converter,
            sanitizer: &self.sanitizer,
            notes_style: &self.notes_style,
            formatter: ReferenceFormatter::new(&separator),
            notes: request.notes,
            emitted_book_notes: HashSet::new(),
        };

        let Some(books) = request.books else {
            let block: VerseBlock<'_> = request.verses.iter().collect();
            writer.write_block(&block, BlockContext::Flat, sink)?;
            return Ok(());
        };

        for book in books {
            let title = self.translations.book_title(&book.long_title).await;
            match &title {
                Some(title) => sink.append_run(title, &RunStyle::bold())?,
                None => log::debug!("No translated title for {}", book.long_title),
            }
            sink.append_line_break()?;

            let blocks = segment(request.verses, Some(book));
            log::debug!(
                "Rendering {} verse block(s) for {}",
                blocks.len(),
                book.short_title
            );
            for block in &blocks {
                writer.write_block(block, BlockContext::Book(title.as_deref()), sink)?;
            }

            sink.append_line_break()?;
        }

        Ok(())
    }
}

/// Whether a block gets a reference header, and with which book title.
#[derive(Debug, Clone, Copy)]
enum BlockContext<'a> {
    Flat,
    Book(Option<&'a str>),
}

/// Synchronous part of one render: everything below the book level.
struct BlockWriter<'r> {
    converter: &'r MarkdownConverter,
    sanitizer: &'r VerseSanitizer,
    notes_style: &'r RunStyle,
    formatter: ReferenceFormatter<'r>,
    notes: &'r Notes,
    emitted_book_notes: HashSet<String>,
}

impl BlockWriter<'_> {
    fn write_block(
        &mut self,
        block: &VerseBlock<'_>,
        context: BlockContext<'_>,
        sink: &mut dyn DocumentSink,
    ) -> Result<(), SinkError> {
        let Some(first) = block.first() else {
            return Ok(());
        };

        if let BlockContext::Book(title) = context {
            for fragment in self.formatter.block_header(title, block) {
                sink.append_run(&fragment, &RunStyle::default())?;
            }
            sink.append_line_break()?;
        }

        let notes = self.notes;
        let book_id = first.book_reference_id();
        if let Some(note) = notes.get(&book_id)
            && self.emitted_book_notes.insert(book_id)
        {
            self.write_note(note, sink)?;
            sink.append_line_break()?;
        }

        for verse in block.verses() {
            let body = self.sanitizer.sanitize(&verse.content);
            sink.append_run(&self.formatter.verse_label(verse), &RunStyle::superscript())?;
            sink.append_run(&format!(" {body}"), &RunStyle::default())?;
            sink.append_line_break()?;

            if let Some(note) = notes.get(&verse.reference_id()) {
                self.write_note(note, sink)?;
            }
        }

        sink.append_line_break()
    }

    fn write_note(&self, note: &Note, sink: &mut dyn DocumentSink) -> Result<(), SinkError> {
        self.converter.convert(&note.text, self.notes_style, sink)?;
        sink.append_line_break()
    }
}
