use crate::{markdown::MarkdownConverter, sanitize::VerseSanitizer};

/// Rendering knobs of a [`VerseExporter`](super::VerseExporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Font size of a level-1 heading in notes and the title.
    pub heading_base_size: u32,
    /// Verse markup element whose subtree is never exported.
    pub excluded_tag: String,
    /// Colour applied to every note run; `None` keeps notes uncoloured.
    pub notes_color: Option<String>,
    /// Separator used when the translation service has none for the text module.
    pub default_separator: String,
}

impl RenderOptions {
    pub const DEFAULT_NOTES_COLOR: &'static str = "2779AA";
    pub const DEFAULT_SEPARATOR: &'static str = ":";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_base_size: MarkdownConverter::DEFAULT_HEADING_BASE_SIZE,
            excluded_tag: VerseSanitizer::DEFAULT_EXCLUDED_TAG.to_string(),
            notes_color: Some(Self::DEFAULT_NOTES_COLOR.to_string()),
            default_separator: Self::DEFAULT_SEPARATOR.to_string(),
        }
    }
}
