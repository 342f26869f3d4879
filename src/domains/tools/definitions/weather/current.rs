//! Current weather tool definition.
//!
//! Fetches `/weather` for a city and renders the conditions as a short
//! multi-line text report.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::client::OpenWeatherClient;
use super::common::{error_result, require_city, success_result};
use super::report::current_report;
use crate::core::config::{Config, WeatherConfig};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the current weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// City to look up.
    #[schemars(description = "City name (e.g., 'Austin, TX', 'London', 'Tokyo')")]
    pub city: String,
}

impl GetWeatherParams {
    /// Validate raw call arguments.
    pub fn from_arguments(arguments: &JsonObject) -> Result<Self, ToolError> {
        Ok(Self {
            city: require_city(arguments)?,
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Current weather tool.
pub struct GetWeatherTool;

impl GetWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather conditions for a city";

    /// Execute the tool logic for already validated parameters.
    #[instrument(skip_all, fields(city = %params.city))]
    pub async fn execute(params: &GetWeatherParams, config: &WeatherConfig) -> CallToolResult {
        info!("Current weather requested");

        match Self::report(params, config).await {
            Ok(report) => {
                info!("Current weather report ready");
                success_result(report)
            }
            Err(e) => error_result(&format!("Failed to get weather: {}", e)),
        }
    }

    async fn report(params: &GetWeatherParams, config: &WeatherConfig) -> Result<String, ToolError> {
        let client = OpenWeatherClient::new(config)?;
        let current = client.current(&params.city).await?;
        Ok(current_report(&current))
    }

    /// Validate raw arguments and execute.
    ///
    /// Validation failures come back as error results, never as protocol errors.
    pub async fn call(arguments: JsonObject, config: &WeatherConfig) -> CallToolResult {
        match GetWeatherParams::from_arguments(&arguments) {
            Ok(params) => Self::execute(&params, config).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetWeatherParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move { Ok::<_, McpError>(Self::call(args, &config.weather).await) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
