//! Group chat viewer for a paired messaging account.
//!
//! This library wraps an external browser-automation-based messaging client
//! behind the [`client::MessagingClient`] trait and serves a small HTML
//! front-end showing connection status, the QR pairing code, and the list of
//! group chats.

pub mod client;
pub mod common;
pub mod server;
