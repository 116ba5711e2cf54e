//! Error types shared across the library.
//!
//! Per-connection faults are logged and contained inside the connection task;
//! only startup faults (configuration, TLS material) surface as `Err` to callers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineSearchError {
    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("TLS material at {path} is unusable: {reason}")]
    Tls { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LineSearchError>;
