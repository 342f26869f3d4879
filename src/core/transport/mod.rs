//! Channels the weather server can be reached on.
//!
//! STDIO is what MCP clients use when they spawn the binary, and is always
//! compiled in by default. A line-delimited JSON-RPC listener on TCP is
//! available behind the `tcp` feature for clients that connect over the
//! network. Both hand every session to the same [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
