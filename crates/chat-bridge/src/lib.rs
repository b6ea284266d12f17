//! Shared bridge infrastructure for chat-agent adapters
//!
//! This crate provides the capabilities an adapter consumes from its
//! runtime:
//! - `ChatConnection` / `ConnectionProvider` for live server connections
//! - `ConnectionRegistry`, a provider backed by an in-process map
//! - `MessageSink` for inbound message hand-off
//! - `PresetLookup` for speaker labels on outgoing messages

pub mod connection;
pub mod registry;
pub mod sink;

pub use connection::{ChatConnection, ConnectionProvider};
pub use registry::ConnectionRegistry;
pub use sink::{MessageSink, PresetLookup};
