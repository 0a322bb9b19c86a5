//! jot-tui - terminal front end for jot
//!
//! Single `App` struct holds all state; rendering is an explicit
//! function from that state to a frame, called after every event.

pub mod app;
pub mod error;
pub mod theme;
pub mod ui;
