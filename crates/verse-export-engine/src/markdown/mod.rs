//! # Markdown Notes
//!
//! Notes and export titles are markdown. They reach the document in two steps:
//!
//! - **`lexer`**: adapts pulldown-cmark's flat event stream into a nested
//!   [`Token`] tree (containers carry `tokens`, lists carry `items`)
//! - **`convert`**: walks that tree and appends styled runs to a
//!   [`DocumentSink`](crate::sink::DocumentSink), merging each token's style
//!   delta into the style inherited from its parent
//!
//! ## Style Inheritance
//!
//! `**bold and *em* text**` becomes three runs: `bold and ` (bold),
//! `em` (bold + italic) and ` text` (bold). Deltas only ever add to a fresh
//! copy of the inherited style, so sibling subtrees never see each other's
//! formatting.

pub mod convert;
pub mod lexer;
pub mod token;

pub use convert::MarkdownConverter;
pub use lexer::lex;
pub use token::Token;

/// Plain text of a markdown string: every leaf text concatenated, without link
/// destinations or breaks.
pub fn plain_text(markdown: &str) -> String {
    token::collect_text(&lex(markdown))
}
