//! Sample data source
//!
//! There is no persistence layer. This stub produces a fixed sequence
//! of notes so the list has something to show in demos and tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::NoteModel;

/// Produces the built-in demo notes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoteDataSource;

impl NoteDataSource {
    /// Load the hard-coded demo notes, in display order
    #[must_use]
    pub fn load_notes(&self) -> Vec<NoteModel> {
        vec![
            note("A good day", "We danced in the rain all afternoon", 2023, 6, 5),
            note("Groceries", "Milk and eggs before the weekend", 2023, 6, 6),
            note("Call grandma", "She wanted to hear about the trip", 2023, 6, 8),
            note("Garden", "The tomatoes finally turned red", 2023, 6, 11),
            note("Reading list", "Finish the chapter on tides", 2023, 6, 14),
            note("Keep walking", "An hour along the river at sunset", 2023, 6, 17),
        ]
    }
}

fn note(title: &str, description: &str, y: i32, m: u32, d: u32) -> NoteModel {
    NoteModel::new(title, description, demo_date(y, m, d))
}

// Dates are fixed so the rendered labels are deterministic.
fn demo_date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid demo date")
        .and_hms_opt(10, 0, 0)
        .expect("valid demo time")
}
