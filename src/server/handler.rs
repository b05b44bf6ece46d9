//! HTTP request handlers.

use std::sync::Arc;

use axum::{Json, extract::State, response::Html};

use super::{events::load_groups, state::AppState, view};

/// Home view: connected banner, pending pairing code, or wait prompt.
pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let connection = state.connection.lock().await;
    Html(view::home_view(&connection))
}

/// Group list view.
///
/// Re-runs the loader on every request so the table is always current;
/// while disconnected it renders the error view without touching the client.
pub async fn group_list(State(state): State<Arc<AppState>>) -> Html<String> {
    let connected = state.connection.lock().await.connected;
    if !connected {
        return Html(view::disconnected_view());
    }

    let groups = load_groups(&state).await;
    Html(view::group_list_view(&groups))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
