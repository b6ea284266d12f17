//! Connection capabilities
//!
//! The transport (framing, authentication, reconnects) lives behind
//! `ChatConnection`; this layer only sees line-oriented text responses.

use async_trait::async_trait;
use chat_agent_core::{Result, StyledComponent};
use std::sync::Arc;

/// A live connection to a single game server
///
/// A connection is not synchronized here: callers submitting concurrent
/// command batches against the same connection must serialize access
/// themselves.
#[async_trait]
pub trait ChatConnection: Send + Sync {
    /// Execute an administrative command and return the raw response text.
    ///
    /// The server reports both results and domain failures through the
    /// same response shape; classification is the caller's concern.
    async fn send_rcon_command(&self, command: &str) -> Result<String>;

    /// Send a styled chat message in the server's wire encoding.
    async fn send_styled_message(&self, message: &StyledComponent) -> Result<()>;
}

/// Resolves channel keys to live connections
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Look up the live connection for a channel key, if any
    async fn get_connection(&self, channel_key: &str) -> Option<Arc<dyn ChatConnection>>;
}
