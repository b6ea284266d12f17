//! Error types for chat-agent bridges

use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge error taxonomy
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Malformed caller input, rejected before any network effect
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation left nothing to send
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// No live connection for the requested channel
    #[error("No live connection for channel: {0}")]
    ConnectionUnavailable(String),

    /// Network or protocol failure during a round trip
    #[error("Transport error: {0}")]
    Transport(String),

    /// Send-time failure, wrapped with context
    #[error("Send failed: {0}")]
    SendFailed(String),
}
