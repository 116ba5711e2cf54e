//! TLS Provisioning
//!
//! Builds the server-side acceptor (certificate chain + private key) and the
//! client-side connector (trusted roots) from PEM files. Both use the `ring`
//! crypto provider explicitly so no process-wide default has to be installed.
//!
//! Server handshakes go through [`accept_without_alert`]: a peer whose first
//! flight is not a usable ClientHello gets its connection closed with nothing
//! written back.

use crate::error::{LineSearchError, Result};

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio_rustls::rustls::crypto::{ring, CryptoProvider};
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};
use tokio_rustls::rustls::server::Acceptor;
use tokio_rustls::rustls::{ClientConfig, RootCertStore, ServerConfig};
use tokio_rustls::server::TlsStream;
use tokio_rustls::{StartHandshake, TlsAcceptor, TlsConnector};

const CLIENT_HELLO_READ_SIZE: usize = 4096;

fn tls_error(path: &Path, reason: impl Display) -> LineSearchError {
    LineSearchError::Tls {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn provider() -> Arc<CryptoProvider> {
    Arc::new(ring::default_provider())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| tls_error(path, e))
}

pub fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let certs = rustls_pemfile::certs(&mut open(path)?)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| tls_error(path, e))?;

    if certs.is_empty() {
        return Err(tls_error(path, "no PEM certificates found"));
    }
    Ok(certs)
}

pub fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>> {
    rustls_pemfile::private_key(&mut open(path)?)
        .map_err(|e| tls_error(path, e))?
        .ok_or_else(|| tls_error(path, "no PEM private key found"))
}

/// Server-side TLS: presents `cert_path`, does not ask clients for certificates.
pub fn load_acceptor(cert_path: &Path, key_path: &Path) -> Result<TlsAcceptor> {
    let certs = load_certs(cert_path)?;
    let key = load_private_key(key_path)?;

    let config = ServerConfig::builder_with_provider(provider())
        .with_safe_default_protocol_versions()
        .map_err(|e| tls_error(cert_path, e))?
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(|e| tls_error(key_path, e))?;

    tracing::info!("TLS context created from {}", cert_path.display());
    Ok(TlsAcceptor::from(Arc::new(config)))
}

/// Performs the server side of a handshake with `acceptor`'s configuration.
///
/// The ClientHello is read and parsed here rather than inside the tokio-rustls
/// acceptor, because that one answers an unparseable first flight with a fatal
/// alert record. Any failure at this stage returns an error with nothing sent.
pub async fn accept_without_alert<IO>(
    acceptor: &TlsAcceptor,
    mut stream: IO,
) -> io::Result<TlsStream<IO>>
where
    IO: AsyncRead + AsyncWrite + Unpin,
{
    let mut hello = Acceptor::default();
    let mut buf = [0u8; CLIENT_HELLO_READ_SIZE];

    let accepted = loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        let mut chunk = &buf[..n];
        while !chunk.is_empty() {
            if hello.read_tls(&mut chunk)? == 0 {
                break;
            }
        }

        match hello.accept() {
            Ok(Some(accepted)) => break accepted,
            Ok(None) => continue,
            // The alert is dropped unsent.
            Err((e, _alert)) => return Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    };

    StartHandshake::from_parts(accepted, stream)
        .into_stream(acceptor.config().clone())
        .await
}

/// Client-side TLS: trusts only the certificates in `ca_path`.
pub fn load_connector(ca_path: &Path) -> Result<TlsConnector> {
    let mut roots = RootCertStore::empty();
    for cert in load_certs(ca_path)? {
        roots.add(cert).map_err(|e| tls_error(ca_path, e))?;
    }

    let config = ClientConfig::builder_with_provider(provider())
        .with_safe_default_protocol_versions()
        .map_err(|e| tls_error(ca_path, e))?
        .with_root_certificates(roots)
        .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}
