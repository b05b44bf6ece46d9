//! Client event pump and group loading.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::ClientEvent;

use super::{
    domain::{GroupSummary, summarize_groups},
    state::AppState,
};

/// Consume client lifecycle events until the channel closes.
///
/// Spawned once by the runner; this is the only writer of connection status
/// and the QR payload.
pub async fn pump_events(state: Arc<AppState>, mut events: mpsc::UnboundedReceiver<ClientEvent>) {
    while let Some(event) = events.recv().await {
        handle_client_event(&state, event).await;
    }
    tracing::debug!("client event channel closed");
}

/// Apply one client event to the shared state.
///
/// A `Ready` event additionally kicks off a background group refresh;
/// its failure is logged and degrades to an empty list, never propagated.
pub async fn handle_client_event(state: &Arc<AppState>, event: ClientEvent) {
    match &event {
        ClientEvent::QrIssued(_) => {
            tracing::info!("pairing code issued; waiting for scan");
        }
        ClientEvent::Ready => {
            tracing::info!("messaging client connected");
        }
        ClientEvent::Disconnected(reason) => {
            tracing::warn!("messaging client disconnected: {reason}");
        }
    }

    {
        let mut connection = state.connection.lock().await;
        connection.apply(&event);
    }

    if event == ClientEvent::Ready {
        let state = state.clone();
        tokio::spawn(async move {
            load_groups(&state).await;
        });
    }
}

/// Fetch the current group list from the client and cache it.
///
/// Returns immediately with an empty list when not connected, without
/// touching the client. On fetch failure the cache is reset to empty and the
/// error is logged; it never reaches the HTTP layer. Re-entrant calls simply
/// overwrite the cache with the latest result (last writer wins).
pub async fn load_groups(state: &Arc<AppState>) -> Vec<GroupSummary> {
    {
        let connection = state.connection.lock().await;
        if !connection.connected {
            tracing::debug!("group load skipped: not connected");
            return Vec::new();
        }
    }

    let groups = match state.client.get_chats().await {
        Ok(chats) => {
            let groups = summarize_groups(&chats);
            tracing::info!("loaded {} groups", groups.len());
            groups
        }
        Err(e) => {
            tracing::error!("failed to fetch chats: {e}");
            Vec::new()
        }
    };

    let mut connection = state.connection.lock().await;
    connection.groups = groups.clone();
    groups
}
