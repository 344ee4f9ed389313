//! Error types for the Lectern client

use thiserror::Error;

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by [`ContentClient`](crate::ContentClient) operations
///
/// Retrieval failures (`Transport`, `Status`) mean the response never
/// arrived in usable form; `Malformed` means it arrived but violated the
/// wire contract. Nothing is retried or patched locally; every failure
/// propagates to the caller for policy decisions.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be completed (connection, timeout, DNS, ...)
    #[error("request for {operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("server returned HTTP {status} for {operation}")]
    Status { operation: &'static str, status: u16 },

    /// The requested book identifier is unknown to the service
    #[error("no book with id \"{id}\"")]
    NotFound { id: String },

    /// The response decoded as JSON but violated the expected schema
    #[error("malformed response for {operation}: {reason}")]
    Malformed {
        operation: &'static str,
        reason: String,
    },
}

impl ClientError {
    /// Whether this is a retrieval failure (transport or status), as
    /// opposed to a schema violation or a missing book
    pub fn is_retrieval(&self) -> bool {
        matches!(self, ClientError::Transport { .. } | ClientError::Status { .. })
    }
}
