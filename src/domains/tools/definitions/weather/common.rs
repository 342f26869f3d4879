//! Common utilities shared across the weather tools.
//!
//! Argument extraction and result construction live here so both tools
//! validate and report in the same way.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Message returned when `city` is missing, empty or not a string.
pub const CITY_REQUIRED: &str = "city is required";

/// Shared description of the `city` parameter.
pub const CITY_DESCRIPTION: &str = "City name (e.g., 'Austin, TX', 'London', 'Tokyo')";

/// Extract the required `city` argument.
///
/// Anything other than a non-blank string is a validation error. A valid
/// value is passed upstream exactly as given.
pub fn require_city(arguments: &JsonObject) -> Result<String, ToolError> {
    arguments
        .get("city")
        .and_then(Value::as_str)
        .filter(|city| !city.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ToolError::invalid_arguments(CITY_REQUIRED))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// First text block of a result; used by tests across the tools domain.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}
