//! Error types for the NetOrca client.

use thiserror::Error;

/// Errors that can occur when using the NetOrca client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Malformed client configuration, detected at construction time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The per-call deadline elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// Connection, DNS or TLS failure before any HTTP status was obtained.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Server returned a non-200 status to a list request.
    ///
    /// Carries the status line only; the response body is discarded.
    #[error("request failed: {status}")]
    RequestFailed {
        /// HTTP status line, e.g. `500 Internal Server Error`.
        status: String,
    },

    /// Server returned a non-200 status to an update request.
    ///
    /// Carries both the status line and the raw body text so server-side
    /// validation messages reach the caller.
    #[error("update rejected: {status}: {body}")]
    UpdateRejected {
        /// HTTP status line, e.g. `400 Bad Request`.
        status: String,
        /// Raw response body text.
        body: String,
    },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
