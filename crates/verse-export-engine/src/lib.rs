pub mod blocks;
pub mod error;
pub mod export;
pub mod markdown;
pub mod models;
pub mod reference;
pub mod sanitize;
pub mod sink;
pub mod style;
pub mod translations;

// Re-export key types for easier usage
pub use blocks::{VerseBlock, segment};
pub use error::{ExportError, SinkError};
pub use export::{ExportRequest, RenderOptions, VerseExporter};
pub use markdown::MarkdownConverter;
pub use models::*;
pub use reference::ReferenceFormatter;
pub use sanitize::VerseSanitizer;
pub use sink::{DocumentSink, HtmlSink, RecordingSink, SinkEvent};
pub use style::RunStyle;
pub use translations::{StaticTranslations, Translations};
