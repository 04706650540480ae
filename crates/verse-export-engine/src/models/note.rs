use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A markdown annotation attached to a verse or a whole book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Notes keyed by reference id. A missing key simply means "no note".
pub type Notes = HashMap<String, Note>;

/// Book-level reference id: the lowercased short title.
pub fn book_reference_id(short_title: &str) -> String {
    short_title.to_lowercase()
}
