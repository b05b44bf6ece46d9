//! Group viewer web server.
//!
//! Serves the connection-status and group-list pages while the external
//! messaging client pairs in the background.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3001
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use wa_group_viewer::{
    client::StubClient, common::logger::setup_logger, server::run_server,
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Web viewer for the group chats of a paired messaging account", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to (probes upward when occupied)
    #[arg(short = 'p', long, default_value = "3001")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // The bootstrap owns the event channel: the client writes lifecycle
    // events into it, the server's pump task consumes them.
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let client = Arc::new(StubClient::new(event_tx));

    if let Err(e) = run_server(args.host, args.port, client, event_rx).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
