//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain: weather tools callable by
//! MCP clients.

pub mod tools;
