use crate::server::tls;

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::TlsConnector;

/// Responses are a single short line; anything past this is ignored.
pub const RESPONSE_BUFFER_SIZE: usize = 1024;

pub struct SearchClient {
    host: String,
    port: u16,
    tls: Option<TlsConnector>,
}

impl SearchClient {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            tls: None,
        }
    }

    /// Enables TLS, verifying the server against the certificates in `ca_path`.
    pub fn with_tls(mut self, ca_path: &Path) -> Result<Self> {
        let connector = tls::load_connector(ca_path)?;
        self.tls = Some(connector);
        Ok(self)
    }

    /// Sends `query` and returns the server's response text.
    ///
    /// An empty string means the server closed without answering, which it does
    /// when it could not decode the request.
    pub async fn query(&self, query: &str) -> Result<String> {
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("Failed to connect to {}:{}", self.host, self.port))?;

        match &self.tls {
            Some(connector) => {
                let server_name = ServerName::try_from(self.host.as_str())
                    .with_context(|| format!("Invalid server name {}", self.host))?
                    .to_owned();
                let stream = connector
                    .connect(server_name, stream)
                    .await
                    .context("TLS handshake failed, is the server running with SSL enabled?")?;
                exchange(stream, query).await
            }
            None => exchange(stream, query).await,
        }
    }
}

async fn exchange<S>(mut stream: S, query: &str) -> Result<String>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream
        .write_all(query.as_bytes())
        .await
        .context("Failed to send query")?;
    stream.flush().await?;

    let mut response = Vec::with_capacity(64);
    (&mut stream)
        .take(RESPONSE_BUFFER_SIZE as u64)
        .read_to_end(&mut response)
        .await
        .context("Failed to read response")?;

    String::from_utf8(response).context("Response is not valid UTF-8")
}
