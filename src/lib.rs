//! Weather MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing two tools backed by the
//! OpenWeatherMap API:
//!
//! - `get_weather`: current conditions for a city
//! - `get_forecast`: 3-hour step forecast for the next hours (default 24, max 120)
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the weather tools, their HTTP client and report formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
