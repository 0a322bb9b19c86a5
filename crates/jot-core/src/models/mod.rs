//! Data models

mod note;

pub use note::NoteModel;
