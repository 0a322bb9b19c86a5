//! Display strings
//!
//! The labels the screen renders, carried as an explicit table rather
//! than an ambient lookup so front ends and tests can substitute their
//! own copy.

/// String table for the note screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    /// Application name shown in the title bar
    pub app_name: String,
    /// Label for the title input field
    pub title: String,
    /// Label for the description input field
    pub description: String,
    /// Label on the save button
    pub save: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            app_name: "Jot".to_string(),
            title: "Title".to_string(),
            description: "Add a note".to_string(),
            save: "Save".to_string(),
        }
    }
}
