//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid operation input (no slot selected, bad quantity, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local durable storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The payment recorder refused or failed the request
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
