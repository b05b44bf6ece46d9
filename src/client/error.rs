//! Error types for the external messaging client seam.

use thiserror::Error;

/// Failures reported by the external messaging client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The bridge failed to start its pairing/session flow.
    #[error("client initialization failed: {0}")]
    Initialization(String),

    /// A chat fetch failed (network hiccup, automation failure).
    #[error("chat fetch failed: {0}")]
    ChatFetch(String),

    /// Graceful teardown failed.
    #[error("client teardown failed: {0}")]
    Teardown(String),
}
