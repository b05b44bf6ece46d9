//! Group viewer web server implementation.

pub mod domain;
mod events;
mod handler;
mod runner;
mod signal;
mod state;
mod view;

pub use runner::run_server;
