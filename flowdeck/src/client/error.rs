//! Client error types.

use std::fmt;

/// Errors that can occur during client operations.
///
/// Both error sources are terminal for the triggering action: the client
/// never retries, and callers surface the display string as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport failure, or an HTTP error status without an envelope body
    Transport(String),
    /// Server returned a `status: "error"` envelope; carries the server
    /// message verbatim
    Api(String),
    /// Response body was not a valid envelope
    InvalidResponse(String),
    /// Operation not available under the configured API layout
    Unsupported {
        operation: &'static str,
        layout: &'static str,
    },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "{}", msg),
            ClientError::Api(msg) => write!(f, "{}", msg),
            ClientError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ClientError::Unsupported { operation, layout } => {
                write!(
                    f,
                    "Operation '{}' is not available for the {} API layout",
                    operation, layout
                )
            }
        }
    }
}

impl std::error::Error for ClientError {}
