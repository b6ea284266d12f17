//! Orchestrator-facing operations
//!
//! The operation surface the agent layer calls into. Capabilities are
//! injected explicitly: connection lookup and preset resolution come from
//! the runtime, never from ambient global state.

use crate::channel::parse_channel_key;
use crate::composer::{compose, parse_descriptors, plain_text_of};
use crate::executor::execute_batch;
use chat_agent_core::{BridgeError, Result, StyledComponent, TextColor};
use chat_bridge::{ConnectionProvider, PresetLookup};
use std::sync::Arc;
use tracing::{error, info};

/// Minecraft adapter operations exposed to the orchestrator
pub struct MinecraftTools {
    connections: Arc<dyn ConnectionProvider>,
    presets: Arc<dyn PresetLookup>,
}

impl MinecraftTools {
    /// Create the operation surface over injected capabilities
    pub fn new(connections: Arc<dyn ConnectionProvider>, presets: Arc<dyn PresetLookup>) -> Self {
        Self {
            connections,
            presets,
        }
    }

    /// Send a styled chat message to the server behind `channel_key`.
    ///
    /// `rich_text_json` is a JSON list of segment objects carrying `text`
    /// plus optional `color` and style flags. The composed message is
    /// prefixed with the channel's speaker label and sent as a single
    /// root element with styled children, the encoding the server
    /// expects.
    pub async fn send_rich_text(&self, channel_key: &str, rich_text_json: &str) -> Result<()> {
        parse_channel_key(channel_key)?;
        if rich_text_json.trim().is_empty() {
            return Err(BridgeError::InvalidInput(
                "rich text JSON must not be empty".to_string(),
            ));
        }

        let connection = self
            .connections
            .get_connection(channel_key)
            .await
            .ok_or_else(|| BridgeError::ConnectionUnavailable(channel_key.to_string()))?;

        let descriptors = parse_descriptors(rich_text_json)?;
        let components = compose(&descriptors)?;
        let plain_text = plain_text_of(&components);

        let preset = self.presets.preset_name(channel_key).await;
        let prefix = StyledComponent::colored(format!("<{preset}>"), TextColor::Green);

        let mut children = Vec::with_capacity(components.len() + 1);
        children.push(prefix);
        children.extend(components);
        let root = StyledComponent::text("").with_extra(children);

        connection.send_styled_message(&root).await.map_err(|e| {
            error!("Failed to send rich text to {}: {}", channel_key, e);
            BridgeError::SendFailed(format!("rich text send to {channel_key} failed: {e}"))
        })?;

        info!("Rich text sent to {}: {}", channel_key, plain_text);
        Ok(())
    }

    /// Execute a batch of RCON commands on the server behind `channel_key`.
    ///
    /// Command-level failures never raise: the caller is an autonomous
    /// agent consuming free text, so results and failures are folded into
    /// the returned report. Only pre-flight validation fails with an
    /// error, before any command is sent. A missing connection is
    /// likewise reported as text.
    pub async fn execute_rcon_commands(
        &self,
        channel_key: &str,
        commands: &[String],
        continue_on_error: bool,
    ) -> Result<String> {
        parse_channel_key(channel_key)?;
        if commands.is_empty() {
            return Err(BridgeError::InvalidInput(
                "command list must not be empty".to_string(),
            ));
        }
        if commands.iter().any(|command| command.trim().is_empty()) {
            return Err(BridgeError::InvalidInput(
                "commands must be non-blank strings".to_string(),
            ));
        }

        let Some(connection) = self.connections.get_connection(channel_key).await else {
            error!("No live connection for {}", channel_key);
            return Ok(format!(
                "Error: no live connection for channel '{channel_key}'"
            ));
        };

        let result = execute_batch(connection.as_ref(), commands, continue_on_error).await;
        Ok(result.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chat_bridge::{ChatConnection, ConnectionRegistry};
    use std::sync::Mutex;

    /// Connection double recording RCON commands and styled sends
    #[derive(Default)]
    struct FakeServer {
        rcon: Mutex<Vec<String>>,
        styled: Mutex<Vec<StyledComponent>>,
        reject_styled: bool,
    }

    #[async_trait]
    impl ChatConnection for FakeServer {
        async fn send_rcon_command(&self, command: &str) -> Result<String> {
            self.rcon.lock().unwrap().push(command.to_string());
            match command {
                "say Hello" => Ok("Hello".into()),
                "time set day" => Ok("Set the time to 24000".into()),
                "invalid_command" => Ok("Unknown or incomplete command".into()),
                other => Ok(other.to_string()),
            }
        }

        async fn send_styled_message(&self, message: &StyledComponent) -> Result<()> {
            if self.reject_styled {
                return Err(BridgeError::Transport("broken pipe".into()));
            }
            self.styled.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct FixedPreset(&'static str);

    #[async_trait]
    impl PresetLookup for FixedPreset {
        async fn preset_name(&self, _channel_key: &str) -> String {
            self.0.to_string()
        }
    }

    async fn tools_with(server: Arc<FakeServer>) -> MinecraftTools {
        let registry = ConnectionRegistry::new();
        registry.register("minecraft-survival", server).await;
        MinecraftTools::new(Arc::new(registry), Arc::new(FixedPreset("Captain")))
    }

    #[tokio::test]
    async fn test_rich_text_wire_shape() {
        let server = Arc::new(FakeServer::default());
        let tools = tools_with(server.clone()).await;

        tools
            .send_rich_text(
                "minecraft-survival",
                r#"[{"text": "hello ", "color": "red"}, {"text": "world", "bold": true}]"#,
            )
            .await
            .unwrap();

        let styled = server.styled.lock().unwrap();
        assert_eq!(styled.len(), 1);

        let root = &styled[0];
        assert_eq!(root.text, "");
        assert_eq!(root.extra.len(), 3);
        // Speaker prefix first, in green
        assert_eq!(root.extra[0].text, "<Captain>");
        assert_eq!(root.extra[0].color, Some(TextColor::Green));
        assert_eq!(root.extra[1].color, Some(TextColor::Red));
        assert_eq!(root.extra[2].bold, Some(true));
    }

    #[tokio::test]
    async fn test_rich_text_validation() {
        let server = Arc::new(FakeServer::default());
        let tools = tools_with(server.clone()).await;

        let err = tools
            .send_rich_text("discord-general", r#"[{"text": "x"}]"#)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let err = tools
            .send_rich_text("minecraft-survival", "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let err = tools
            .send_rich_text("minecraft-survival", "{not json")
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let err = tools
            .send_rich_text("minecraft-survival", r#"["no", "objects"]"#)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::EmptyResult(_)));

        // Nothing reached the server
        assert!(server.styled.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rich_text_requires_live_connection() {
        let server = Arc::new(FakeServer::default());
        let tools = tools_with(server).await;

        let err = tools
            .send_rich_text("minecraft-creative", r#"[{"text": "x"}]"#)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::ConnectionUnavailable(_)));
    }

    #[tokio::test]
    async fn test_rich_text_send_failure_is_wrapped() {
        let server = Arc::new(FakeServer {
            reject_styled: true,
            ..Default::default()
        });
        let tools = tools_with(server).await;

        let err = tools
            .send_rich_text("minecraft-survival", r#"[{"text": "x"}]"#)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::SendFailed(_)));
    }

    #[tokio::test]
    async fn test_rcon_batch_happy_path() {
        let server = Arc::new(FakeServer::default());
        let tools = tools_with(server).await;

        let report = tools
            .execute_rcon_commands(
                "minecraft-survival",
                &["say Hello".to_string(), "time set day".to_string()],
                false,
            )
            .await
            .unwrap();

        assert_eq!(
            report,
            "Command 'say Hello': Hello\nCommand 'time set day': Set the time to 24000"
        );
    }

    #[tokio::test]
    async fn test_rcon_preflight_validation() {
        let server = Arc::new(FakeServer::default());
        let tools = tools_with(server.clone()).await;

        let err = tools
            .execute_rcon_commands("survival", &["say hi".to_string()], false)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let err = tools
            .execute_rcon_commands("minecraft-survival", &[], false)
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        let err = tools
            .execute_rcon_commands(
                "minecraft-survival",
                &["say hi".to_string(), "  ".to_string()],
                false,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)));

        // Validation failures happen before any round trip
        assert!(server.rcon.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rcon_missing_connection_reports_as_text() {
        let server = Arc::new(FakeServer::default());
        let tools = tools_with(server.clone()).await;

        let report = tools
            .execute_rcon_commands("minecraft-creative", &["say hi".to_string()], false)
            .await
            .unwrap();

        assert_eq!(
            report,
            "Error: no live connection for channel 'minecraft-creative'"
        );
        assert!(server.rcon.lock().unwrap().is_empty());
    }
}
