//! TCP Listener
//!
//! Binds the server socket and runs the accept loop. The loop only ever awaits
//! `accept`; TLS handshakes, reads, searches and writes all happen inside the
//! task spawned for each connection.

use super::handler::{handle_connection, ConnectionContext};
use super::tls;
use crate::config::types::ServerConfig;
use crate::corpus::store::CorpusStore;
use crate::error::Result;
use crate::resolver::service::QueryResolver;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio_rustls::TlsAcceptor;

/// Pause after a failed `accept` (e.g. out of file descriptors) before retrying.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub struct Listener {
    listener: TcpListener,
    context: Arc<ConnectionContext>,
    tls: Option<TlsAcceptor>,
}

impl Listener {
    /// Binds according to `config`, with a fresh resolver and cache.
    ///
    /// Fails if TLS is enabled and the certificate or key cannot be loaded, or if
    /// the address cannot be bound.
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let resolver = QueryResolver::new(
            CorpusStore::new(&config.corpus_path),
            config.reread_on_query,
        );
        Self::bind_with_resolver(config, resolver).await
    }

    pub async fn bind_with_resolver(config: &ServerConfig, resolver: QueryResolver) -> Result<Self> {
        let tls = if config.ssl_enabled {
            Some(tls::load_acceptor(&config.ssl_cert, &config.ssl_key)?)
        } else {
            tracing::info!("TLS disabled, serving plaintext connections");
            None
        };

        let addr = config.bind_addr();
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(config.backlog)?;

        let context = Arc::new(ConnectionContext {
            resolver,
            algorithm: config.algorithm.clone(),
            max_payload_size: config.max_payload_size,
            read_timeout: config.read_timeout,
            tls_enabled: tls.is_some(),
        });

        Ok(Self {
            listener,
            context,
            tls,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until `shutdown` resolves. Connections already dispatched keep
    /// running to completion in their own tasks.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tracing::info!(
            "Listening on {} (tls={}, reread_on_query={}, algorithm={})",
            self.listener
                .local_addr()
                .map_or_else(|_| "<unknown>".to_string(), |addr| addr.to_string()),
            self.context.tls_enabled,
            self.context.resolver.reread_on_query(),
            self.context.algorithm
        );

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, no longer accepting connections");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => self.dispatch(stream, peer),
                    Err(e) => {
                        tracing::warn!("Failed to accept connection: {}", e);
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                    }
                },
            }
        }
    }

    /// Hands the connection to its own task and returns immediately.
    fn dispatch(&self, stream: TcpStream, peer: SocketAddr) {
        tracing::trace!("Accepted connection from {}", peer);

        let context = self.context.clone();
        let tls = self.tls.clone();

        tokio::spawn(async move {
            match tls {
                Some(acceptor) => {
                    let handshake = tls::accept_without_alert(&acceptor, stream);
                    let handshake = match context.read_timeout {
                        Some(limit) => match tokio::time::timeout(limit, handshake).await {
                            Ok(result) => result,
                            Err(_) => {
                                tracing::warn!("TLS handshake with {} timed out", peer);
                                return;
                            }
                        },
                        None => handshake.await,
                    };

                    match handshake {
                        Ok(tls_stream) => {
                            handle_connection(tls_stream, peer, &context).await;
                        }
                        Err(e) => {
                            tracing::warn!(
                                "TLS handshake with {} failed, dropping connection: {}",
                                peer,
                                e
                            );
                        }
                    }
                }
                None => {
                    handle_connection(stream, peer, &context).await;
                }
            }
        });
    }
}
