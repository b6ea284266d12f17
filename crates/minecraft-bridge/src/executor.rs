//! Sequential RCON command batch execution
//!
//! Commands may have server-side ordering dependencies ("give item"
//! before "teleport"), so a batch runs strictly in order with no retry
//! and no parallel fan-out. The per-command round trip is the only
//! suspension point; a stalled round trip blocks the batch, and callers
//! needing bounded latency must wrap the transport call with a deadline.

use crate::classify::{RconStatus, classify_response};
use chat_bridge::ChatConnection;
use tracing::{error, info};

/// Text reported for a successful command with a blank response,
/// so "no response" is never confused with "not yet run".
const NO_OUTPUT: &str = "command executed, no output";

/// Outcome of a single command within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RconOutcome {
    pub command: String,
    pub status: RconStatus,
    /// Trimmed response text, or the error description for failures
    pub response: String,
}

impl RconOutcome {
    fn to_line(&self) -> String {
        match self.status {
            RconStatus::Success => format!("Command '{}': {}", self.command, self.response),
            _ => format!("Command '{}': Error - {}", self.command, self.response),
        }
    }
}

/// How a batch terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Every command was attempted
    Completed,
    /// Stopped at the first failure under the fail-fast policy
    Aborted,
}

/// Ordered outcomes of one batch run
///
/// The outcome count equals the number of commands actually attempted:
/// all of them when the batch completed, the first failure's position
/// when it aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub outcomes: Vec<RconOutcome>,
    pub status: BatchStatus,
}

impl BatchResult {
    /// Render the human-readable report the orchestrator consumes.
    ///
    /// A completed batch lists one line per command in original order.
    /// An aborted batch leads with the failing command and keeps the
    /// previously accumulated results, so prior progress is never lost.
    pub fn render(&self) -> String {
        match (self.status, self.outcomes.split_last()) {
            (BatchStatus::Aborted, Some((failed, prior))) => {
                let mut report =
                    format!("Error executing command '{}': {}", failed.command, failed.response);
                if !prior.is_empty() {
                    report.push_str("\nPrevious results:\n");
                    let lines: Vec<String> = prior.iter().map(RconOutcome::to_line).collect();
                    report.push_str(&lines.join("\n"));
                }
                report
            }
            _ => {
                let lines: Vec<String> = self.outcomes.iter().map(RconOutcome::to_line).collect();
                lines.join("\n")
            }
        }
    }
}

/// Run `commands` in order over `connection`.
///
/// Each response is classified as success or semantic error; a failed
/// round trip becomes a `TransportError` outcome. With
/// `continue_on_error` a failure is recorded and the batch goes on;
/// without it the batch stops at the first failure.
pub async fn execute_batch(
    connection: &dyn ChatConnection,
    commands: &[String],
    continue_on_error: bool,
) -> BatchResult {
    let mut outcomes = Vec::with_capacity(commands.len());

    for command in commands {
        let outcome = match connection.send_rcon_command(command).await {
            Ok(response) => {
                let response = response.trim();
                let status = classify_response(response);
                let response = if response.is_empty() {
                    NO_OUTPUT.to_string()
                } else {
                    response.to_string()
                };
                RconOutcome {
                    command: command.clone(),
                    status,
                    response,
                }
            }
            Err(e) => RconOutcome {
                command: command.clone(),
                status: RconStatus::TransportError,
                response: e.to_string(),
            },
        };

        let failed = outcome.status != RconStatus::Success;
        if failed {
            error!("RCON command '{}' failed: {}", outcome.command, outcome.response);
        } else {
            info!("RCON command '{}' succeeded: {}", outcome.command, outcome.response);
        }
        outcomes.push(outcome);

        if failed && !continue_on_error {
            return BatchResult {
                outcomes,
                status: BatchStatus::Aborted,
            };
        }
    }

    BatchResult {
        outcomes,
        status: BatchStatus::Completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chat_agent_core::{BridgeError, Result, StyledComponent};
    use std::sync::Mutex;

    /// Scripted server: responds per command, records everything sent
    #[derive(Default)]
    struct FakeServer {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatConnection for FakeServer {
        async fn send_rcon_command(&self, command: &str) -> Result<String> {
            self.sent.lock().unwrap().push(command.to_string());
            match command {
                "say Hello" => Ok("Hello".into()),
                "say World" => Ok("World".into()),
                "time set day" => Ok("Set the time to 24000".into()),
                "gamerule doDaylightCycle false" => Ok("  ".into()),
                "invalid_command" => Ok("Unknown or incomplete command, see below for error".into()),
                "netsplit" => Err(BridgeError::Transport("connection reset by peer".into())),
                other => Ok(other.to_string()),
            }
        }

        async fn send_styled_message(&self, _message: &StyledComponent) -> Result<()> {
            Ok(())
        }
    }

    fn commands(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_all_success_report() {
        let server = FakeServer::default();
        let result =
            execute_batch(&server, &commands(&["say Hello", "time set day"]), false).await;

        assert_eq!(result.status, BatchStatus::Completed);
        assert_eq!(
            result.render(),
            "Command 'say Hello': Hello\nCommand 'time set day': Set the time to 24000"
        );
    }

    #[tokio::test]
    async fn test_fail_fast_stops_the_batch() {
        let server = FakeServer::default();
        let result = execute_batch(
            &server,
            &commands(&["say Hello", "invalid_command", "say World"]),
            false,
        )
        .await;

        assert_eq!(result.status, BatchStatus::Aborted);
        assert_eq!(result.outcomes.len(), 2);
        // "say World" is never attempted
        assert_eq!(
            *server.sent.lock().unwrap(),
            vec!["say Hello".to_string(), "invalid_command".to_string()]
        );
        assert_eq!(
            result.render(),
            "Error executing command 'invalid_command': \
             Unknown or incomplete command, see below for error\n\
             Previous results:\nCommand 'say Hello': Hello"
        );
    }

    #[tokio::test]
    async fn test_continue_on_error_attempts_everything() {
        let server = FakeServer::default();
        let result = execute_batch(
            &server,
            &commands(&["say Hello", "invalid_command", "say World"]),
            true,
        )
        .await;

        assert_eq!(result.status, BatchStatus::Completed);
        assert_eq!(result.outcomes.len(), 3);

        let report = result.render();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Command 'say Hello': Hello");
        assert!(lines[1].starts_with("Command 'invalid_command': Error - "));
        assert_eq!(lines[2], "Command 'say World': World");
    }

    #[tokio::test]
    async fn test_fail_fast_on_first_command_has_no_prior_results() {
        let server = FakeServer::default();
        let result = execute_batch(&server, &commands(&["invalid_command"]), false).await;

        assert_eq!(result.outcomes.len(), 1);
        let report = result.render();
        assert!(report.starts_with("Error executing command 'invalid_command':"));
        assert!(!report.contains("Previous results"));
    }

    #[tokio::test]
    async fn test_blank_success_response_is_labelled() {
        let server = FakeServer::default();
        let result =
            execute_batch(&server, &commands(&["gamerule doDaylightCycle false"]), false).await;

        assert_eq!(
            result.render(),
            "Command 'gamerule doDaylightCycle false': command executed, no output"
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_recorded() {
        let server = FakeServer::default();
        let result =
            execute_batch(&server, &commands(&["netsplit", "say Hello"]), true).await;

        assert_eq!(result.outcomes[0].status, RconStatus::TransportError);
        assert_eq!(result.outcomes.len(), 2);

        let report = result.render();
        assert!(
            report.starts_with(
                "Command 'netsplit': Error - Transport error: connection reset by peer"
            )
        );
    }

    #[tokio::test]
    async fn test_transport_error_fail_fast() {
        let server = FakeServer::default();
        let result =
            execute_batch(&server, &commands(&["netsplit", "say Hello"]), false).await;

        assert_eq!(result.status, BatchStatus::Aborted);
        assert_eq!(*server.sent.lock().unwrap(), vec!["netsplit".to_string()]);
    }
}
