//! Error types for response parsing

use thiserror::Error;

/// Errors from parsing a generated article list
///
/// The verifier converts any of these into the canned fallback
/// articles; they are public so callers can parse generated output
/// directly and see why it was rejected.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The response was not parseable JSON, even after unfencing
    #[error("JSON parse error: {0}")]
    InvalidJson(String),

    /// The response parsed, but the top level was not an array
    #[error("Expected JSON array, got {0}")]
    NotAnArray(String),

    /// One entry was missing a field, had a non-string field, or had
    /// an empty field
    #[error("Invalid article at index {index}: {reason}")]
    InvalidArticle {
        /// Position of the offending entry in the array
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::InvalidJson(e.to_string())
    }
}
