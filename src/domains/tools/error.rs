//! Tool-specific error types.
//!
//! Every variant is recovered at the tool boundary and turned into an
//! error result for the client; none of them stop the server.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A required argument was missing or had the wrong type.
    #[error("{0}")]
    InvalidArguments(String),

    /// No API key is configured for the upstream weather API.
    #[error("WEATHER_API_KEY not set")]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The HTTP request could not be completed or its body could not be read.
    #[error("failed to fetch {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// The upstream body was not the JSON shape we expect.
    #[error("failed to parse {resource}: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new upstream error from a status code and raw body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}
