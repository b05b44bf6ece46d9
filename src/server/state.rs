//! Shared application state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::MessagingClient;

use super::domain::ConnectionState;

/// Shared application state
pub struct AppState {
    /// Connection state mutated by the event pump and the group loader,
    /// read by the HTTP handlers.
    pub connection: Mutex<ConnectionState>,
    /// The external messaging client (opaque collaborator).
    pub client: Arc<dyn MessagingClient>,
}

impl AppState {
    /// Create fresh state around the given client, starting disconnected.
    pub fn new(client: Arc<dyn MessagingClient>) -> Self {
        Self {
            connection: Mutex::new(ConnectionState::default()),
            client,
        }
    }
}
