//! # Document Sinks
//!
//! The exporter only decides *what* goes into a document and in which order.
//! Everything it produces is pushed through [`DocumentSink`], an append-only
//! target with two primitives: a styled text run and a hard line break.
//!
//! - **`recording`**: [`RecordingSink`] keeps every event in memory
//! - **`html`**: [`HtmlSink`] writes runs as inline HTML to any `io::Write`

pub mod html;
pub mod recording;

pub use html::HtmlSink;
pub use recording::{RecordingSink, SinkEvent};

use crate::{error::SinkError, style::RunStyle};

/// Append-only document target.
///
/// Implementations are not expected to be thread-safe; a single export owns
/// the sink exclusively while it renders.
pub trait DocumentSink {
    fn append_run(&mut self, text: &str, style: &RunStyle) -> Result<(), SinkError>;

    fn append_line_break(&mut self) -> Result<(), SinkError>;
}
