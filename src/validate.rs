//! Input validation for words typed by the user.

use crate::error::{AppError, Result};

/// Trim `input` and accept it only if it is one or more ASCII letters.
///
/// # Errors
///
/// Returns [`AppError::InvalidWord`] for empty input, spaces inside the
/// word, digits, punctuation or non-ASCII letters.
pub fn validate_word(input: &str) -> Result<String> {
    let word = input.trim();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(word.to_string())
    } else {
        Err(AppError::InvalidWord(word.to_string()))
    }
}
