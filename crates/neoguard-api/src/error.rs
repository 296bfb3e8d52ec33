//! Error types for the media analysis client.

use thiserror::Error;

/// Media analysis client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected locally before any network traffic
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure (DNS, connect, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-success status
    ///
    /// `message` is the `message` field of the error body when the
    /// service sent one, otherwise a fixed generic string.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided error message, or the generic default
        message: String,
    },

    /// A success response whose body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
