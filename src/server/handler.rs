//! Connection Handler
//!
//! Runs the single request/response exchange for one accepted connection. Works
//! over any byte stream, so plain TCP, TLS, and in-memory test pipes share the
//! same code path.

use super::protocol::{decode_query, verdict_response};
use crate::resolver::service::QueryResolver;

use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Everything a connection task needs, shared by all tasks of one listener.
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    pub resolver: QueryResolver,
    pub algorithm: String,
    pub max_payload_size: usize,
    pub read_timeout: Option<Duration>,
    pub tls_enabled: bool,
}

/// How a connection ended. Only used for logging and tests; the client sees
/// either a verdict line or a bare close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionOutcome {
    Answered { query: String, found: bool },
    Undecodable,
    TimedOut,
    TransportError(String),
}

/// Reads one query, answers it, and shuts the stream down.
///
/// Never returns an error: every failure is logged with the peer address and
/// reported through the returned outcome.
pub async fn handle_connection<S>(
    mut stream: S,
    peer: SocketAddr,
    context: &ConnectionContext,
) -> ConnectionOutcome
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let started = Instant::now();
    let mut buf = vec![0u8; context.max_payload_size];

    // A single read: queries are expected to arrive in one segment.
    let read = match context.read_timeout {
        Some(limit) => match tokio::time::timeout(limit, stream.read(&mut buf)).await {
            Ok(read) => read,
            Err(_) => {
                tracing::warn!("No query from {} within {:?}, closing", peer, limit);
                return ConnectionOutcome::TimedOut;
            }
        },
        None => stream.read(&mut buf).await,
    };

    let len = match read {
        Ok(len) => len,
        Err(e) => {
            tracing::warn!("Failed to read query from {}: {}", peer, e);
            return ConnectionOutcome::TransportError(e.to_string());
        }
    };

    let query = match decode_query(&buf[..len]) {
        Ok(query) => query.to_string(),
        Err(e) => {
            tracing::warn!(
                "Failed to decode query from {} (TLS enabled on server: {}): {}",
                peer,
                context.tls_enabled,
                e
            );
            return ConnectionOutcome::Undecodable;
        }
    };

    let found = context.resolver.resolve(&query, &context.algorithm).await;

    let sent = async {
        stream.write_all(verdict_response(found).as_bytes()).await?;
        stream.flush().await?;
        stream.shutdown().await
    }
    .await;

    if let Err(e) = sent {
        tracing::warn!("Failed to send response to {}: {}", peer, e);
        return ConnectionOutcome::TransportError(e.to_string());
    }

    tracing::debug!(
        query = %query,
        peer = %peer,
        found,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        tls = context.tls_enabled,
        reread_on_query = context.resolver.reread_on_query(),
        algorithm = %context.algorithm,
        "Answered query"
    );

    ConnectionOutcome::Answered { query, found }
}
