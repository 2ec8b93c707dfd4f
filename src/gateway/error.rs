//! Failure taxonomy for gateway operations.
//!
//! Three kinds are distinguished: transport failures where no response was
//! obtained, non-success responses from the server, and payloads that could
//! not be decoded. [`GatewayError::user_message`] flattens each kind to the
//! fixed text published into aggregate state.

use thiserror::Error;

/// Errors a gateway operation can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Transport or connectivity failure; no response was obtained.
    #[error("network error: {0}")]
    Network(String),

    /// The server responded with a non-success status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid payload: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Map the error kind to the fixed user-facing message published into
    /// aggregate state. Only this text crosses the subscription boundary.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Network(_) => {
                "Network connectivity issue. Please check your internet connection.".to_string()
            }
            GatewayError::Server { status, message } => {
                format!("Server error: {} {}", status, message)
            }
            GatewayError::Decode(_) => {
                "Invalid data received. Please try again later.".to_string()
            }
        }
    }

    /// Short kind tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Network(_) => "network",
            GatewayError::Server { .. } => "server",
            GatewayError::Decode(_) => "decode",
        }
    }
}
