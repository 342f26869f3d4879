//! TCP transport.
//!
//! Accepts connections and runs an independent MCP session per peer, using
//! line-delimited JSON-RPC on the socket. A failing session is logged and
//! dropped without affecting the listener.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Listener serving the weather tools to TCP clients.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// `host:port` the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> TransportResult<TcpListener> {
        let address = self.address();
        TcpListener::bind(&address)
            .await
            .map_err(|e| TransportError::bind(address, e))
    }

    /// Bind, then accept clients until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let listener = self.bind().await?;
        match listener.local_addr() {
            Ok(local) => info!("{} accepting TCP clients on {}", server.name(), local),
            Err(_) => info!("{} accepting TCP clients on {}", server.name(), self.address()),
        }

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("accept failed: {}", e);
                    sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("TCP_NODELAY not set for {}: {}", peer, e);
            }

            tokio::spawn(Self::serve_peer(server.clone(), stream, peer));
        }
    }

    async fn serve_peer(server: McpServer, stream: TcpStream, peer: SocketAddr) {
        info!("Session opened for {}", peer);

        let session = match server.serve(stream).await {
            Ok(session) => session,
            Err(e) => {
                warn!("Handshake with {} failed: {}", peer, e);
                return;
            }
        };

        match session.waiting().await {
            Ok(reason) => info!("Session for {} ended: {:?}", peer, reason),
            Err(e) => warn!("Session for {} aborted: {}", peer, e),
        }
    }
}
