//! Input validation
//!
//! The note fields accept letters and whitespace only. Anything else
//! is dropped silently by the caller; there is no feedback path.

/// Check whether a candidate field value is acceptable.
///
/// True iff every character is alphabetic or whitespace. The empty
/// string passes vacuously, so clearing a field is always allowed.
///
/// # Examples
///
/// ```
/// use jot_core::input::is_letters_or_whitespace;
///
/// assert!(is_letters_or_whitespace("Milk and eggs"));
/// assert!(!is_letters_or_whitespace("Milk x2"));
/// ```
#[must_use]
pub fn is_letters_or_whitespace(text: &str) -> bool {
    text.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}
