use super::cli::ServerArgs;
use crate::error::{LineSearchError, Result};
use crate::search::strategy::SearchStrategy;

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 44445;
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 1024;
pub const DEFAULT_BACKLOG: u32 = 5;
pub const DEFAULT_CORPUS_PATH: &str = "data/200k.txt";
pub const DEFAULT_SSL_CERT: &str = "ssl_keys/self_signed_cert.pem";
pub const DEFAULT_SSL_KEY: &str = "ssl_keys/private_key.pem";

/// Fully resolved server settings. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub corpus_path: PathBuf,
    pub reread_on_query: bool,
    pub max_payload_size: usize,
    /// Kept as the configured name; unknown names resolve every query to "not found".
    pub algorithm: String,
    pub ssl_enabled: bool,
    pub ssl_cert: PathBuf,
    pub ssl_key: PathBuf,
    pub backlog: u32,
    pub read_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            reread_on_query: true,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            algorithm: SearchStrategy::default().name().to_string(),
            ssl_enabled: false,
            ssl_cert: PathBuf::from(DEFAULT_SSL_CERT),
            ssl_key: PathBuf::from(DEFAULT_SSL_KEY),
            backlog: DEFAULT_BACKLOG,
            read_timeout: None,
        }
    }
}

/// On-disk schema. Keys mirror the environment variable names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<IpAddr>,
    pub port_number: Option<u16>,
    #[serde(rename = "LINUXPATH", alias = "CORPUS_PATH")]
    pub corpus_path: Option<PathBuf>,
    pub reread_on_query: Option<bool>,
    pub max_payload_size: Option<usize>,
    pub algorithm: Option<String>,
    pub ssl_enabled: Option<bool>,
    pub ssl_cert: Option<PathBuf>,
    pub ssl_key: Option<PathBuf>,
    pub backlog: Option<u32>,
    pub read_timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LineSearchError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|e| match e {
            LineSearchError::Config(reason) => {
                LineSearchError::Config(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }
}

impl ServerConfig {
    /// Layers flags over the file (if any) over the defaults, then validates.
    pub fn resolve(args: ServerArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let config = Self::merge(args, file);
        config.validate()?;
        Ok(config)
    }

    pub fn merge(args: ServerArgs, file: FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            host: args.host.or(file.host).unwrap_or(defaults.host),
            port: args.port.or(file.port_number).unwrap_or(defaults.port),
            corpus_path: args
                .corpus
                .or(file.corpus_path)
                .unwrap_or(defaults.corpus_path),
            reread_on_query: args
                .reread_on_query
                .or(file.reread_on_query)
                .unwrap_or(defaults.reread_on_query),
            max_payload_size: args
                .max_payload_size
                .or(file.max_payload_size)
                .unwrap_or(defaults.max_payload_size),
            algorithm: args
                .algorithm
                .or(file.algorithm)
                .unwrap_or(defaults.algorithm),
            ssl_enabled: args
                .ssl_enabled
                .or(file.ssl_enabled)
                .unwrap_or(defaults.ssl_enabled),
            ssl_cert: args.ssl_cert.or(file.ssl_cert).unwrap_or(defaults.ssl_cert),
            ssl_key: args.ssl_key.or(file.ssl_key).unwrap_or(defaults.ssl_key),
            backlog: args.backlog.or(file.backlog).unwrap_or(defaults.backlog),
            read_timeout: args
                .read_timeout_secs
                .or(file.read_timeout_secs)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_payload_size == 0 {
            return Err(LineSearchError::Config(
                "MAX_PAYLOAD_SIZE must be greater than zero".to_string(),
            ));
        }
        if self.backlog == 0 {
            return Err(LineSearchError::Config(
                "BACKLOG must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = self.algorithm.parse::<SearchStrategy>() {
            tracing::warn!("{}; every query will be answered as not found", e);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
