//! Configuration Module
//!
//! Resolves the server's settings from three layers, highest precedence first:
//! 1. Command-line flags (each also readable from an environment variable of the
//!    same name as the file key, e.g. `PORT_NUMBER`).
//! 2. An optional TOML file passed with `--config`.
//! 3. Built-in defaults.
//!
//! ## Submodules
//! - **`cli`**: `clap` argument definitions for the server and client binaries.
//! - **`types`**: The resolved `ServerConfig`, the file schema, and the merge.

pub mod cli;
pub mod types;
