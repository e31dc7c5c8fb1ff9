//! GraphQL client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the GraphQL endpoint.
///
/// GraphQL-level `errors` in a well-formed response are not represented
/// here; they are logged and the response's `data` is used as-is.
#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("GraphQL transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GraphQL endpoint responded with {0}")]
    Status(StatusCode),

    #[error("Malformed GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GraphqlError {
    /// Returns true if repeating the request may succeed.
    ///
    /// Timeouts, connection failures, and 5xx responses are transient.
    /// Malformed responses and 4xx statuses are not.
    pub fn is_transient(&self) -> bool {
        match self {
            GraphqlError::Transport(e) => e.is_timeout() || e.is_connect(),
            GraphqlError::Status(status) => status.is_server_error(),
            GraphqlError::Decode(_) => false,
        }
    }
}

/// Result type for GraphQL operations.
pub type GraphqlResult<T> = Result<T, GraphqlError>;
