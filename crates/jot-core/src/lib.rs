//! jot-core - Core library for jot
//!
//! This crate contains the note model, the sample data source, the
//! input-validation predicate, and the screen state shared by every
//! jot front end.

pub mod data;
pub mod input;
pub mod models;
pub mod resources;
pub mod screen;

pub use data::NoteDataSource;
pub use models::NoteModel;
pub use resources::Strings;
pub use screen::NoteScreenState;
