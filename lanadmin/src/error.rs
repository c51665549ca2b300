//! Error types.

use thiserror::Error;

/// The main error type for lanadmin operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-related error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with an `error` field.
    #[error("{message}")]
    Api { message: String },

    /// The bearer token was rejected; it has been cleared.
    #[error("Session expired. Please reload & relogin.")]
    SessionExpired,

    /// Failed to parse response data.
    #[error("Parse error: {0}")]
    Parse(String),

    /// New password and its confirmation differ.
    #[error("Repeat password mismatch.")]
    PasswordMismatch,

    /// Invalid argument passed to an API method.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Create an API error from the service's `error` message.
    pub fn api(message: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Check if the session token was rejected.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::SessionExpired)
    }

    /// Check if the error was detected locally, before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::PasswordMismatch | Error::InvalidArgument(_))
    }
}

/// Result type alias for lanadmin operations.
pub type Result<T> = std::result::Result<T, Error>;
