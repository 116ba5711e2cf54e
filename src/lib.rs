//! Line Search Server Library
//!
//! Core of a TCP service that answers one question per connection: does this exact
//! string appear as a line of the corpus?
//!
//! ## Architecture Modules
//! Leaves first:
//!
//! - **`corpus`**: Reads the corpus file into an ordered line list (re-read mode) or
//!   a deduplicated set that is built once and shared (cached mode).
//! - **`search`**: Five interchangeable exact-match strategies over either view:
//!   linear, binary, breadth-first, depth-first and hash.
//! - **`resolver`**: Applies the re-read policy to pick a view, then runs the
//!   configured strategy.
//! - **`server`**: The listener, per-connection handler, wire protocol and TLS.
//! - **`config`**: Flag, environment and TOML-file configuration.
//! - **`client`**: A small client for the same protocol.

pub mod client;
pub mod config;
pub mod corpus;
pub mod error;
pub mod resolver;
pub mod search;
pub mod server;

pub use error::{LineSearchError, Result};
