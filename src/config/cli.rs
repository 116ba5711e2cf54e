use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::net::IpAddr;
use std::path::PathBuf;

/// Flags for `line-search-server`. Every value is optional so that unset flags
/// fall through to the config file and then to the defaults.
#[derive(Debug, Default, Parser)]
#[command(
    name = "line-search-server",
    version,
    about = "Answers whether an exact line exists in a text corpus"
)]
pub struct ServerArgs {
    /// TOML file with SCREAMING_CASE keys (PORT_NUMBER, SSL_ENABLED, ...).
    #[arg(long, env = "LINE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "LINE_SEARCH_HOST")]
    pub host: Option<IpAddr>,

    #[arg(long, env = "PORT_NUMBER")]
    pub port: Option<u16>,

    /// Path of the corpus file.
    #[arg(long, env = "LINUXPATH")]
    pub corpus: Option<PathBuf>,

    /// Reload the corpus on every query instead of caching it once.
    #[arg(long, env = "REREAD_ON_QUERY", value_parser = BoolishValueParser::new())]
    pub reread_on_query: Option<bool>,

    #[arg(long, env = "MAX_PAYLOAD_SIZE")]
    pub max_payload_size: Option<usize>,

    /// linear, binary, breadth, depth or hash.
    #[arg(long, env = "ALGORITHM")]
    pub algorithm: Option<String>,

    #[arg(long, env = "SSL_ENABLED", value_parser = BoolishValueParser::new())]
    pub ssl_enabled: Option<bool>,

    #[arg(long, env = "SSL_CERT")]
    pub ssl_cert: Option<PathBuf>,

    #[arg(long, env = "SSL_KEY")]
    pub ssl_key: Option<PathBuf>,

    #[arg(long, env = "BACKLOG")]
    pub backlog: Option<u32>,

    /// Drop connections that send nothing for this many seconds.
    #[arg(long, env = "READ_TIMEOUT_SECS")]
    pub read_timeout_secs: Option<u64>,
}

/// Flags for `line-search-client`.
#[derive(Debug, Parser)]
#[command(
    name = "line-search-client",
    version,
    about = "Asks a line-search server whether a line exists"
)]
pub struct ClientArgs {
    /// The exact line to look for.
    pub query: String,

    #[arg(long, default_value = "localhost")]
    pub host: String,

    #[arg(long, env = "PORT_NUMBER", default_value_t = super::types::DEFAULT_PORT)]
    pub port: u16,

    /// Negotiate TLS with the server. `SSL_ENABLED` accepts the same values the
    /// server does (`True`, `1`, `no`, ...).
    #[arg(
        long,
        env = "SSL_ENABLED",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub ssl: bool,

    /// PEM file with the certificate(s) used to verify the server.
    #[arg(long, env = "SSL_CA_CERT")]
    pub ca_cert: Option<PathBuf>,
}
