//! Inbound message delivery and channel presets

use async_trait::async_trait;
use chat_agent_core::{InboundMessage, Result};

/// Receives normalized inbound messages from adapters
///
/// Delivery is at-most-once: the adapter attempts a single non-blocking
/// hand-off and accepts message loss if the sink fails.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn push(&self, channel_key: &str, inbound: &InboundMessage) -> Result<()>;
}

/// Resolves the speaker label used to prefix outgoing styled messages
#[async_trait]
pub trait PresetLookup: Send + Sync {
    async fn preset_name(&self, channel_key: &str) -> String;
}
