//! Line-Search Server Module
//!
//! The network face of the service: one TCP listener, one tokio task per accepted
//! connection, one query per connection.
//!
//! ## Connection lifecycle
//! `ACCEPTED -> (TLS handshake) -> AWAIT_PAYLOAD -> RESOLVING -> RESPONDING -> CLOSED`
//!
//! Every fault after `accept` (handshake failure, reset, undecodable payload,
//! read timeout) is logged and ends only that connection. The only faults that
//! stop the server are startup ones: binding the port or loading TLS material.
//!
//! ## Submodules
//! - **`listener`**: Socket setup, the accept loop, and per-connection dispatch.
//! - **`handler`**: The per-connection request/response exchange.
//! - **`protocol`**: Payload decoding and the two fixed response strings.
//! - **`tls`**: Building rustls acceptors and connectors from PEM files.

pub mod handler;
pub mod listener;
pub mod protocol;
pub mod tls;
