//! Note screen state
//!
//! The screen owns exactly two pieces of ephemeral text state, the
//! title and description being typed. Every candidate value runs
//! through the validation predicate before it lands; rejected
//! candidates leave the previous value in place with no feedback.

use crate::input::is_letters_or_whitespace;

/// Local input state for the note screen
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteScreenState {
    title: String,
    description: String,
}

impl NoteScreenState {
    /// Fresh state with both fields empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title text
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description text
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Offer a candidate title. Returns whether it was accepted.
    pub fn set_title(&mut self, candidate: &str) -> bool {
        if is_letters_or_whitespace(candidate) {
            self.title = candidate.to_string();
            true
        } else {
            false
        }
    }

    /// Offer a candidate description. Returns whether it was accepted.
    pub fn set_description(&mut self, candidate: &str) -> bool {
        if is_letters_or_whitespace(candidate) {
            self.description = candidate.to_string();
            true
        } else {
            false
        }
    }

    /// The save action.
    ///
    /// When both fields are non-empty, clears them and returns true.
    /// Otherwise leaves both untouched and returns false. Emptiness is
    /// literal; whitespace-only text counts as non-empty. Saving does
    /// not construct a note and does not notify anyone.
    pub fn save(&mut self) -> bool {
        if self.title.is_empty() || self.description.is_empty() {
            tracing::debug!("save skipped, a field is empty");
            return false;
        }
        tracing::debug!(title = %self.title, "save clears input fields");
        self.title.clear();
        self.description.clear();
        true
    }
}
