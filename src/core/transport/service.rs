//! Picks the transport named by [`TransportConfig`] and runs the server on it.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

/// Entry point used by the binary to serve the weather tools.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Run until the selected transport stops.
    ///
    /// For STDIO that is when the client disconnects. The TCP listener only
    /// returns on a bind failure.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            "Serving {} v{} over {}",
            server.name(),
            server.version(),
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(tcp) => TcpTransport::new(tcp).run(server).await,
        }
    }
}
