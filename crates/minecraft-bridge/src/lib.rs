//! Minecraft bridge for the chat-agent platform
//!
//! Bridges a Minecraft server's text-console protocol to the platform
//! message model:
//!
//! - **Inbound**: chat events normalize into the canonical envelope and
//!   are handed to the message sink
//! - **Outbound chat**: styled-text descriptors compose into the server's
//!   JSON text encoding (single root element with styled children)
//! - **Outbound admin**: RCON command batches execute strictly in order,
//!   with fail-fast or continue-on-error policies, and report results as
//!   free text for the orchestrating agent

pub mod channel;
pub mod classify;
pub mod composer;
pub mod executor;
pub mod normalizer;
pub mod tools;

pub use channel::{CHANNEL_KEY_PREFIX, channel_key_for, parse_channel_key};
pub use classify::{RCON_ERROR_PREFIXES, RconStatus, classify_response};
pub use composer::{StyleDescriptor, compose, parse_descriptors, plain_text_of};
pub use executor::{BatchResult, BatchStatus, RconOutcome, execute_batch};
pub use normalizer::{ChatEvent, RawSegment, collect_chat_event, normalize, synthesize_message_id};
pub use tools::MinecraftTools;
