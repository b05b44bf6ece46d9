//! Development stand-in for the real messaging bridge.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{Chat, ClientError, ClientEvent, MessagingClient};

/// Stand-in client used when no real bridge is configured.
///
/// Emits a single fake pairing code on `initialize()` and never completes
/// pairing, so the web layer can be exercised end to end without a messaging
/// account. Swap in a real [`MessagingClient`] implementation to go live.
pub struct StubClient {
    events: mpsc::UnboundedSender<ClientEvent>,
}

impl StubClient {
    /// Create a stub client that emits its events on `events`.
    pub fn new(events: mpsc::UnboundedSender<ClientEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl MessagingClient for StubClient {
    async fn initialize(&self) -> Result<(), ClientError> {
        tracing::warn!("stub messaging client active; pairing will never complete");
        self.events
            .send(ClientEvent::QrIssued("stub-pairing-code".to_string()))
            .map_err(|e| ClientError::Initialization(e.to_string()))?;
        Ok(())
    }

    async fn get_chats(&self) -> Result<Vec<Chat>, ClientError> {
        Ok(Vec::new())
    }

    async fn destroy(&self) -> Result<(), ClientError> {
        Ok(())
    }
}
