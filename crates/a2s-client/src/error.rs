//! Client error types.

use a2s_core::FieldIssue;

/// Errors that can occur when using the waitlist client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the submission.
    #[error("{message}")]
    Validation {
        /// Summary message from the server.
        message: String,
        /// One issue per violated field.
        issues: Vec<FieldIssue>,
    },

    /// Server returned any other error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
