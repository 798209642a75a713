//! Client error types

use thiserror::Error;

/// Client error type
///
/// Transport and server-reported failures. Local validation failures (cart,
/// checkout) have their own types and never become a `ClientError`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the server (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-2xx response
    #[error("Server error: {0}")]
    Server(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Authorization-class errors: the front end redirects to login or hides
    /// the action instead of showing an inline message.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
