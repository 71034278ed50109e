//! Error types for the license server client.

use thiserror::Error;

/// Result type for license server operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the license server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, timeout, connection refused).
    #[error("network error: {0}")]
    Network(String),

    /// No license record behind the given key or id.
    #[error("license record not found")]
    NotFound,

    /// The server answered with a status the operation does not accept.
    #[error("unexpected status {status}: {hint}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Operator-facing hint for the status.
        hint: &'static str,
    },

    /// The response body could not be decoded.
    #[error("invalid response from license server: {0}")]
    InvalidResponse(String),

    /// The connection settings cannot produce a usable URL.
    #[error("invalid license server config: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Builds an [`ApiError::UnexpectedStatus`] with the hint attached.
    #[must_use]
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus {
            status,
            hint: status_hint(status),
        }
    }
}

/// Operator-facing hint for an unexpected status code.
#[must_use]
pub fn status_hint(status: u16) -> &'static str {
    match status {
        401 => "Authorization header either missing or not provided.",
        403 => "Double check the API key configured as the server password.",
        404 => "Result not found.",
        422 => "Validation error.",
        500 => "License server errored, check its logs.",
        _ => "None.",
    }
}
