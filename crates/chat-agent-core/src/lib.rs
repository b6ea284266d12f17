//! # chat-agent-core
//!
//! Core types for chat-agent adapters.
//!
//! This crate provides the foundational types shared by all adapters:
//! - The canonical message envelope inbound chat events normalize into
//! - Styled-text components for the game chat wire encoding
//! - Pseudonymous user identity derivation
//! - The bridge error taxonomy

pub mod envelope;
pub mod error;
pub mod identity;
pub mod styled;

pub use envelope::{CanonicalMessage, ChannelKind, ChannelRef, InboundMessage, MessageSegment, UserRef};
pub use error::{BridgeError, Result};
pub use identity::short_user_id;
pub use styled::{StyledComponent, TextColor};
