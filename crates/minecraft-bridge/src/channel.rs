//! Channel key handling
//!
//! One channel per server; the platform addresses it as
//! `minecraft-<servername>`.

use chat_agent_core::{BridgeError, Result};

/// Prefix every Minecraft channel key carries
pub const CHANNEL_KEY_PREFIX: &str = "minecraft-";

/// Build the channel key for a server name
pub fn channel_key_for(server_name: &str) -> String {
    format!("{CHANNEL_KEY_PREFIX}{server_name}")
}

/// Extract the server name from a channel key
pub fn parse_channel_key(channel_key: &str) -> Result<&str> {
    match channel_key.strip_prefix(CHANNEL_KEY_PREFIX) {
        Some(server_name) if !server_name.is_empty() => Ok(server_name),
        _ => Err(BridgeError::InvalidInput(format!(
            "channel key must match 'minecraft-<servername>', got '{channel_key}'"
        ))),
    }
}
