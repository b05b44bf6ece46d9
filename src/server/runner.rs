//! Server execution logic.

use std::{io, sync::Arc};

use axum::{Router, routing::get};
use tokio::{net::TcpListener, sync::mpsc};
use tower_http::trace::TraceLayer;

use crate::client::{ClientEvent, MessagingClient};

use super::{
    events::pump_events,
    handler::{group_list, health_check, home},
    signal::shutdown_signal,
    state::AppState,
};

/// How many consecutive ports to try when the configured one is taken.
const PORT_PROBE_RANGE: u16 = 16;

/// Run the group viewer server.
///
/// Binds the HTTP listener first, then initializes the messaging client in
/// the background so the status page is reachable while pairing is still in
/// progress. Blocks until a shutdown signal arrives, then releases the
/// client before returning.
///
/// # Arguments
///
/// * `host` - The host address to bind to (e.g., "127.0.0.1")
/// * `port` - The first port to try (probes upward when occupied)
/// * `client` - The external messaging client
/// * `events` - Lifecycle events emitted by the client
pub async fn run_server(
    host: String,
    port: u16,
    client: Arc<dyn MessagingClient>,
    events: mpsc::UnboundedReceiver<ClientEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(client.clone()));

    let app = Router::new()
        .route("/", get(home))
        .route("/grup", get(group_list))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let listener = bind_with_probe(&host, port).await?;
    tracing::info!("Group viewer listening on http://{}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown gracefully");

    // Event pump first, then client init, so no event is dropped.
    tokio::spawn(pump_events(state, events));
    let init_client = client.clone();
    tokio::spawn(async move {
        tracing::info!("initializing messaging client");
        if let Err(e) = init_client.initialize().await {
            tracing::error!("messaging client initialization failed: {e}");
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("releasing messaging client");
    if let Err(e) = client.destroy().await {
        tracing::error!("messaging client teardown failed: {e}");
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Bind to `start_port`, probing upward through a bounded range when taken.
async fn bind_with_probe(host: &str, start_port: u16) -> io::Result<TcpListener> {
    for port in start_port..start_port.saturating_add(PORT_PROBE_RANGE) {
        match TcpListener::bind((host, port)).await {
            Ok(listener) => {
                if port != start_port {
                    tracing::warn!("port {start_port} is in use, bound to {port} instead");
                }
                return Ok(listener);
            }
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AddrInUse,
        format!("no free port in {start_port}..{}", start_port.saturating_add(PORT_PROBE_RANGE)),
    ))
}
