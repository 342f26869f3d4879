//! Tool Registry - central catalog and name-based dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools and their metadata
//! - Dispatch of a tool call by name, using the same code path as the router

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, JsonObject, Tool};

use crate::core::config::Config;

use super::ToolError;
use super::definitions::{GetForecastTool, GetWeatherTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GetWeatherTool::NAME, GetForecastTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GetWeatherTool::to_tool(), GetForecastTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Only an unknown tool name is an `Err`; every failure inside a tool
    /// comes back as an error result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let weather = &self.config.weather;
        match name {
            GetWeatherTool::NAME => Ok(GetWeatherTool::call(arguments, weather).await),
            GetForecastTool::NAME => Ok(GetForecastTool::call(arguments, weather).await),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
