//! Inbound chat event normalization
//!
//! Converts raw server chat events into the canonical envelope and hands
//! them to the message sink.

use crate::channel::channel_key_for;
use chat_agent_core::{
    CanonicalMessage, ChannelKind, ChannelRef, InboundMessage, MessageSegment, UserRef,
    short_user_id,
};
use chat_bridge::MessageSink;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Platform name stamped on every normalized user
pub const PLATFORM_NAME: &str = "Minecraft";

/// One fragment of raw inbound content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawSegment {
    Text { text: String },
    /// Anything else the server may deliver; dropped from the projection
    #[serde(other)]
    Unsupported,
}

/// A chat event as delivered by the server connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Server the event originated from; doubles as the channel id
    pub server_name: String,
    /// Native player identifier (UUID)
    pub player_uuid: String,
    /// Player display name; the server may omit it
    #[serde(default)]
    pub player_nickname: Option<String>,
    /// Raw message content
    pub message: Vec<RawSegment>,
    /// Protocol-supplied message id, when the server provides one
    #[serde(default)]
    pub message_id: Option<String>,
    /// Event timestamp in seconds since the Unix epoch
    pub timestamp: i64,
}

/// Build a message id for events that arrive without one.
///
/// Deterministic over `(server, user_id, timestamp)`, so redelivery of
/// the same event maps to the same id within a channel-timestamp pair.
pub fn synthesize_message_id(server_name: &str, user_id: &str, timestamp: i64) -> String {
    format!("mc_{server_name}_{user_id}_{timestamp}")
}

fn extract_plain_text(segments: &[RawSegment]) -> String {
    segments
        .iter()
        .filter_map(|segment| match segment {
            RawSegment::Text { text } => Some(text.as_str()),
            RawSegment::Unsupported => None,
        })
        .collect()
}

/// Normalize a chat event into the canonical envelope.
///
/// There are no error conditions: a missing nickname passes through as an
/// empty display name, and non-text content is dropped from the single
/// `Text` segment produced.
pub fn normalize(event: &ChatEvent) -> InboundMessage {
    let channel = ChannelRef {
        channel_id: event.server_name.clone(),
        channel_name: event.server_name.clone(),
        kind: ChannelKind::Group,
    };

    let user_id = short_user_id(&event.player_uuid);
    let display_name = event.player_nickname.clone().unwrap_or_default();

    let user = UserRef {
        platform_name: PLATFORM_NAME.to_string(),
        user_id: user_id.clone(),
        display_name: display_name.clone(),
        avatar_url: String::new(),
    };

    let plain_text = extract_plain_text(&event.message);

    let message_id = event
        .message_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            synthesize_message_id(&event.server_name, &user_id, event.timestamp)
        });

    let message = CanonicalMessage {
        message_id,
        sender_id: user_id,
        sender_name: display_name,
        segments: vec![MessageSegment::Text {
            content: plain_text.clone(),
        }],
        plain_text,
        // The protocol has no @-mention concept
        directed_at_recipient: false,
        timestamp: event.timestamp,
    };

    InboundMessage {
        channel,
        user,
        message,
    }
}

/// Normalize an event and hand it to the message sink.
///
/// At-most-once: a sink failure is logged and the message is dropped.
pub async fn collect_chat_event(sink: &dyn MessageSink, event: &ChatEvent) {
    let inbound = normalize(event);
    let channel_key = channel_key_for(&inbound.channel.channel_id);

    info!("Minecraft message on {}: {}", channel_key, inbound.message.plain_text);

    if let Err(e) = sink.push(&channel_key, &inbound).await {
        warn!(
            "Message sink rejected {} on {}: {}",
            inbound.message.message_id, channel_key, e
        );
    }
}
