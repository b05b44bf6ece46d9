//! The external messaging client seam.
//!
//! The real connection to the messaging service lives in a
//! browser-automation bridge that this crate treats as an opaque
//! collaborator. This module defines the trait the rest of the crate talks
//! to, the lifecycle events the bridge emits, and the chat record it hands
//! back.

mod error;
mod stub;

pub use error::ClientError;
pub use stub::StubClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A chat as reported by the external client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Stable external identifier.
    pub id: String,
    /// Display name; may be empty for unnamed groups.
    pub name: String,
    /// Whether this is a multi-participant group chat.
    pub is_group: bool,
    /// Participant identifiers.
    pub participants: Vec<String>,
}

/// Lifecycle events emitted by the external client after `initialize()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// A pairing code was issued; carries the raw QR payload to render.
    QrIssued(String),
    /// The session is paired and ready to serve chat queries.
    Ready,
    /// The session dropped; carries the reason reported by the bridge.
    Disconnected(String),
}

/// Interface to the external messaging client.
///
/// Implementations emit [`ClientEvent`]s on the channel the bootstrap wires
/// up; this trait only covers the request/response half of the bridge.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Start the pairing/session flow. Events arrive asynchronously after
    /// this call; an error here means the bridge itself failed to start.
    async fn initialize(&self) -> Result<(), ClientError>;

    /// Fetch all current chats (groups and one-to-one).
    async fn get_chats(&self) -> Result<Vec<Chat>, ClientError>;

    /// Release the session and any automation resources.
    async fn destroy(&self) -> Result<(), ClientError>;
}
