//! Note model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A note in the system
///
/// Plain value record: two equal notes are interchangeable, there is
/// no separate identity. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteModel {
    /// Short heading shown at the top of a card
    pub title: String,
    /// Body text shown under the title
    pub description: String,
    /// When the note was entered
    pub entry_date: NaiveDateTime,
}

impl NoteModel {
    /// Create a note with the given title, description, and entry date
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        entry_date: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            entry_date,
        }
    }

    /// Entry date formatted for display, e.g. `"Mon, 5 Jun"`
    ///
    /// Abbreviated weekday, unpadded day of month, abbreviated month.
    #[must_use]
    pub fn entry_date_label(&self) -> String {
        self.entry_date.format("%a, %-d %b").to_string()
    }
}
