use std::io;

use thiserror::Error;

/// Result type alias using jot-tui's error
pub type Result<T> = std::result::Result<T, TuiError>;

/// Errors that can occur while running the terminal front end
#[derive(Debug, Error)]
pub enum TuiError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
