//! Classification of RCON responses
//!
//! The server has no structured error channel: domain failures arrive as
//! plain text in the same shape as results. Known failure phrasings are
//! recognized by prefix; classification is kept a pure function so it is
//! testable without a live connection.

/// Response prefixes the server uses for domain-level failures, checked
/// in order.
///
/// The set is server-version dependent and not exhaustive: a new error
/// phrasing that matches no prefix is classified as success.
pub const RCON_ERROR_PREFIXES: &[&str] = &[
    "Unknown or incomplete command",
    "Incorrect argument",
    "Invalid player",
    "Player not found",
    "That player is not online",
    "You do not have permission to use this command",
    "Cannot give",
    "Invalid UUID",
    "No such entity",
    "That block is not a container",
    "Could not insert items",
    "Data tag parsing failed",
    "Expected",
    "Invalid command syntax",
    "An unexpected error occurred",
    "No targets matched selector",
    "The entity UUID is invalid",
    "Invalid command format",
];

/// Status of a single RCON command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RconStatus {
    /// The server executed the command
    Success,
    /// The server accepted the command but reported a domain failure
    SemanticError,
    /// The round trip itself failed; the command may never have reached
    /// the server
    TransportError,
}

/// Classify a raw response as success or semantic error.
///
/// Transport failures never reach this function; the executor assigns
/// `TransportError` at the I/O boundary.
pub fn classify_response(response: &str) -> RconStatus {
    let response = response.trim();
    if RCON_ERROR_PREFIXES
        .iter()
        .any(|prefix| response.starts_with(prefix))
    {
        RconStatus::SemanticError
    } else {
        RconStatus::Success
    }
}
