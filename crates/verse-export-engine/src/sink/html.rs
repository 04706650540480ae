use std::io::Write;

use super::DocumentSink;
use crate::{error::SinkError, style::RunStyle};

/// Writes the document as a single HTML paragraph of inline runs.
///
/// Style attributes map onto inline markup: bold → `<strong>`, italic →
/// `<em>`, superscript → `<sup>`, highlight → `<mark>`, font size and colour →
/// an inline `style` attribute.
pub struct HtmlSink<W: Write> {
    writer: W,
}

impl<W: Write> HtmlSink<W> {
    /// Writes the document head and opens the body paragraph.
    pub fn begin(mut writer: W, title: &str) -> Result<Self, SinkError> {
        write!(
            writer,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<p>\n",
            html_escape::encode_text(title)
        )?;
        Ok(Self { writer })
    }

    /// Closes the document and hands the writer back.
    pub fn finish(mut self) -> Result<W, SinkError> {
        self.writer.write_all(b"</p>\n</body>\n</html>\n")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> DocumentSink for HtmlSink<W> {
    fn append_run(&mut self, text: &str, style: &RunStyle) -> Result<(), SinkError> {
        self.writer.write_all(render_run(text, style).as_bytes())?;
        Ok(())
    }

    fn append_line_break(&mut self) -> Result<(), SinkError> {
        self.writer.write_all(b"<br>\n")?;
        Ok(())
    }
}

fn render_run(text: &str, style: &RunStyle) -> String {
    let mut html = html_escape::encode_text(text).into_owned();

    if style.is_superscript() {
        html = format!("<sup>{html}</sup>");
    }
    if let Some(color) = &style.highlight {
        html = format!(
            "<mark style=\"background-color: {}\">{html}</mark>",
            html_escape::encode_double_quoted_attribute(color)
        );
    }
    if style.is_italic() {
        html = format!("<em>{html}</em>");
    }
    if style.is_bold() {
        html = format!("<strong>{html}</strong>");
    }

    let mut css = Vec::new();
    if let Some(size) = style.font_size {
        css.push(format!("font-size: {size}pt"));
    }
    if let Some(color) = &style.color {
        css.push(format!("color: #{}", color.trim_start_matches('#')));
    }
    if !css.is_empty() {
        html = format!(
            "<span style=\"{}\">{html}</span>",
            html_escape::encode_double_quoted_attribute(&css.join("; "))
        );
    }

    html
}
