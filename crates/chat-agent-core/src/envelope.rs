//! Canonical message envelope
//!
//! The platform-neutral model every inbound chat event is normalized into
//! before it is handed to the message sink.

use serde::{Deserialize, Serialize};

/// Kind of channel a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Shared channel visible to everyone on a server
    Group,
    /// One-to-one conversation
    Direct,
}

/// Identifies a server channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub channel_id: String,
    pub channel_name: String,
    pub kind: ChannelKind,
}

/// A platform user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Source platform name, e.g. "Minecraft"
    pub platform_name: String,
    /// Stable pseudonym derived from the native identifier, never the raw id
    pub user_id: String,
    /// Display name as reported by the platform; may be empty
    pub display_name: String,
    pub avatar_url: String,
}

/// One fragment of canonical message content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageSegment {
    Text { content: String },
}

/// The platform-neutral message envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMessage {
    /// Protocol-supplied id, or a synthesized one when the protocol has none.
    /// Always non-empty; unique within one channel-timestamp pair.
    pub message_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub segments: Vec<MessageSegment>,
    /// Plain-text projection of `segments`
    pub plain_text: String,
    /// Whether the message addresses the receiving agent directly
    pub directed_at_recipient: bool,
    /// Event timestamp in seconds since the Unix epoch
    pub timestamp: i64,
}

/// A normalized message together with its channel and sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub channel: ChannelRef,
    pub user: UserRef,
    pub message: CanonicalMessage,
}
