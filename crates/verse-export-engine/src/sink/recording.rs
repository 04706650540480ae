use serde::Serialize;

use super::DocumentSink;
use crate::{error::SinkError, style::RunStyle};

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkEvent {
    Run { text: String, style: RunStyle },
    LineBreak,
}

impl SinkEvent {
    pub fn run(text: impl Into<String>, style: RunStyle) -> Self {
        SinkEvent::Run {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::run(text, RunStyle::default())
    }
}

/// In-memory sink that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }

    /// Text runs only, in order, with their styles.
    pub fn runs(&self) -> impl Iterator<Item = (&str, &RunStyle)> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Run { text, style } => Some((text.as_str(), style)),
            SinkEvent::LineBreak => None,
        })
    }

    /// Flattens the log into plain text, one `\n` per line break.
    pub fn text(&self) -> String {
        self.events
            .iter()
            .map(|event| match event {
                SinkEvent::Run { text, .. } => text.as_str(),
                SinkEvent::LineBreak => "\n",
            })
            .collect()
    }
}

impl DocumentSink for RecordingSink {
    fn append_run(&mut self, text: &str, style: &RunStyle) -> Result<(), SinkError> {
        self.events.push(SinkEvent::run(text, style.clone()));
        Ok(())
    }

    fn append_line_break(&mut self) -> Result<(), SinkError> {
        self.events.push(SinkEvent::LineBreak);
        Ok(())
    }
}
