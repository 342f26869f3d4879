//! Forecast tool definition.
//!
//! Fetches `/forecast` for a city and renders one line per 3-hour step
//! covering the requested number of hours.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::client::OpenWeatherClient;
use super::common::{error_result, require_city, success_result};
use super::report::{entry_count, forecast_report};
use crate::core::config::{Config, WeatherConfig};
use crate::domains::tools::ToolError;

// ============================================================================
// Configuration & Constants
// ============================================================================

/// Hours forecast when `hours` is omitted or not positive.
pub const DEFAULT_FORECAST_HOURS: u32 = 24;

/// Upper bound for `hours`; larger values are clamped silently.
pub const MAX_FORECAST_HOURS: u32 = 120;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the forecast tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetForecastParams {
    /// City to look up.
    #[schemars(description = "City name (e.g., 'Austin, TX', 'London', 'Tokyo')")]
    pub city: String,

    /// Requested forecast window in hours.
    #[schemars(description = "Hours to forecast (default 24, max 120)")]
    #[serde(default)]
    pub hours: Option<f64>,
}

impl GetForecastParams {
    /// Validate raw call arguments.
    ///
    /// A non-numeric `hours` is treated as absent.
    pub fn from_arguments(arguments: &JsonObject) -> Result<Self, ToolError> {
        Ok(Self {
            city: require_city(arguments)?,
            hours: arguments.get("hours").and_then(Value::as_f64),
        })
    }

    /// Effective forecast window: defaulted, truncated to whole hours and clamped.
    pub fn hours(&self) -> u32 {
        resolve_hours(self.hours)
    }
}

/// Apply the default and the upper bound to a requested hour count.
///
/// Non-positive values and NaN fall back to the default. Fractional hours are
/// truncated, so `0.5` yields 0 and the report still shows one entry.
pub fn resolve_hours(requested: Option<f64>) -> u32 {
    match requested {
        Some(hours) if hours > 0.0 => hours.min(MAX_FORECAST_HOURS as f64) as u32,
        _ => DEFAULT_FORECAST_HOURS,
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Forecast tool.
pub struct GetForecastTool;

impl GetForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_forecast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather forecast for upcoming hours";

    /// Execute the tool logic for already validated parameters.
    #[instrument(skip_all, fields(city = %params.city, hours = params.hours()))]
    pub async fn execute(params: &GetForecastParams, config: &WeatherConfig) -> CallToolResult {
        info!("Forecast requested");

        match Self::report(params, config).await {
            Ok(report) => {
                info!("Forecast report ready");
                success_result(report)
            }
            Err(e) => error_result(&format!("Failed to get forecast: {}", e)),
        }
    }

    async fn report(params: &GetForecastParams, config: &WeatherConfig) -> Result<String, ToolError> {
        let hours = params.hours();
        let client = OpenWeatherClient::new(config)?;
        let series = client.forecast(&params.city).await?;

        info!(
            "Rendering {} of {} forecast entries",
            entry_count(hours, series.entries.len()),
            series.entries.len()
        );

        Ok(forecast_report(&series, hours))
    }

    /// Validate raw arguments and execute.
    ///
    /// Validation failures come back as error results, never as protocol errors.
    pub async fn call(arguments: JsonObject, config: &WeatherConfig) -> CallToolResult {
        match GetForecastParams::from_arguments(&arguments) {
            Ok(params) => Self::execute(&params, config).await,
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetForecastParams>(),
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

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{any, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    /// Forecast body with `count` entries three hours apart.
    fn forecast_body(count: usize) -> String {
        let list: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "dt": 1_760_875_200 + (i as i64) * 10_800,
                    "dt_txt": format!("2026-10-{:02} {:02}:00:00", 19 + i / 8, (i % 8) * 3),
                    "main": {"temp": 60.2 + i as f64, "feels_like": 59.0, "humidity": 70},
                    "weather": [{"main": "Clouds", "description": "scattered clouds"}],
                    "wind": {"speed": 6.26},
                    "pop": 0.1
                })
            })
            .collect();

        json!({ "cod": "200", "cnt": count, "list": list, "city": {"name": "Austin"} }).to_string()
    }

    async fn mock_forecast(body: String) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("units", "imperial"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn entry_lines(report: &str) -> usize {
        report.lines().skip(1).count()
    }

    #[test]
    fn test_resolve_hours() {
        assert_eq!(resolve_hours(None), 24);
        assert_eq!(resolve_hours(Some(500.0)), 120);
        assert_eq!(resolve_hours(Some(-5.0)), 24);
        assert_eq!(resolve_hours(Some(0.0)), 24);
        assert_eq!(resolve_hours(Some(12.0)), 12);
        assert_eq!(resolve_hours(Some(7.9)), 7);
        assert_eq!(resolve_hours(Some(0.5)), 0);
        assert_eq!(resolve_hours(Some(120.0)), 120);
        assert_eq!(resolve_hours(Some(f64::NAN)), 24);
    }

    #[test]
    fn test_params_from_arguments() {
        let params = GetForecastParams::from_arguments(&args(json!({ "city": "Oslo" }))).unwrap();
        assert_eq!(params.hours, None);
        assert_eq!(params.hours(), 24);

        let params =
            GetForecastParams::from_arguments(&args(json!({ "city": "Oslo", "hours": "48" })))
                .unwrap();
        assert_eq!(params.hours(), 24);

        let params =
            GetForecastParams::from_arguments(&args(json!({ "city": "Oslo", "hours": 48 })))
                .unwrap();
        assert_eq!(params.hours(), 48);
    }

    #[test]
    fn test_tool_metadata() {
        let tool = GetForecastTool::to_tool();
        assert_eq!(tool.name, "get_forecast");
        let required = tool.input_schema.get("required").cloned().unwrap();
        assert_eq!(required, json!(["city"]));
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("hours").is_some());
    }

    #[tokio::test]
    async fn test_report_matches_fixture() {
        let body = json!({
            "list": [
                {
                    "dt_txt": "2026-10-19 15:00:00",
                    "main": {"temp": 71.6, "humidity": 64},
                    "weather": [{"main": "Rain", "description": "light rain"}],
                    "wind": {"speed": 10.34},
                    "pop": 0.78
                },
                {
                    "dt_txt": "2026-10-19 18:00:00",
                    "main": {"temp": 68.2, "humidity": 71},
                    "weather": [],
                    "wind": {"speed": 4.0},
                    "pop": 0
                }
            ],
            "city": {"name": "Austin"}
        })
        .to_string();
        let server = mock_forecast(body).await;

        let config = WeatherConfig::with_api_key(server.uri(), "k");
        let result =
            GetForecastTool::call(args(json!({ "city": "Austin", "hours": 6 })), &config).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result_text(&result),
            "Forecast for Austin (next 6 hours):\n  \
             2026-10-19 15:00:00: 72°F, light rain, wind 10.3 mph, rain chance 78%\n  \
             2026-10-19 18:00:00: 68°F, Clear, wind 4.0 mph, rain chance 0%\n"
        );
    }

    #[tokio::test]
    async fn test_default_hours_render_eight_of_forty() {
        let server = mock_forecast(forecast_body(40)).await;
        let config = WeatherConfig::with_api_key(server.uri(), "k");

        let result = GetForecastTool::call(args(json!({ "city": "Austin" })), &config).await;
        let text = result_text(&result);

        assert!(text.starts_with("Forecast for Austin (next 24 hours):\n"));
        assert_eq!(entry_lines(&text), 8);
    }

    #[tokio::test]
    async fn test_three_hours_render_one_entry() {
        let server = mock_forecast(forecast_body(40)).await;
        let config = WeatherConfig::with_api_key(server.uri(), "k");

        let result =
            GetForecastTool::call(args(json!({ "city": "Austin", "hours": 3 })), &config).await;
        assert_eq!(entry_lines(&result_text(&result)), 1);
    }

    #[tokio::test]
    async fn test_entries_clamped_to_available() {
        let server = mock_forecast(forecast_body(2)).await;
        let config = WeatherConfig::with_api_key(server.uri(), "k");

        let result =
            GetForecastTool::call(args(json!({ "city": "Austin", "hours": 24 })), &config).await;
        let text = result_text(&result);

        assert!(text.starts_with("Forecast for Austin (next 24 hours):\n"));
        assert_eq!(entry_lines(&text), 2);
    }

    #[tokio::test]
    async fn test_hours_clamped_silently_in_header() {
        let server = mock_forecast(forecast_body(40)).await;
        let config = WeatherConfig::with_api_key(server.uri(), "k");

        let result =
            GetForecastTool::call(args(json!({ "city": "Austin", "hours": 500 })), &config).await;
        let text = result_text(&result);

        assert!(text.starts_with("Forecast for Austin (next 120 hours):\n"));
        assert_eq!(entry_lines(&text), 40);
    }

    #[tokio::test]
    async fn test_sub_hour_request_renders_single_entry() {
        let server = mock_forecast(forecast_body(40)).await;
        let config = WeatherConfig::with_api_key(server.uri(), "k");

        let result =
            GetForecastTool::call(args(json!({ "city": "Austin", "hours": 0.5 })), &config).await;
        let text = result_text(&result);

        assert_eq!(result.is_error, Some(false));
        assert!(text.starts_with("Forecast for Austin (next 0 hours):\n"));
        assert_eq!(entry_lines(&text), 1);
    }

    #[tokio::test]
    async fn test_negative_hours_use_default() {
        let server = mock_forecast(forecast_body(40)).await;
        let config = WeatherConfig::with_api_key(server.uri(), "k");

        let result =
            GetForecastTool::call(args(json!({ "city": "Austin", "hours": -5 })), &config).await;
        let text = result_text(&result);

        assert!(text.starts_with("Forecast for Austin (next 24 hours):\n"));
        assert_eq!(entry_lines(&text), 8);
    }

    #[tokio::test]
    async fn test_missing_city_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = WeatherConfig::with_api_key(server.uri(), "k");
        let result = GetForecastTool::call(args(json!({ "hours": 12 })), &config).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "city is required");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_error_result() {
        let result = GetForecastTool::call(
            args(json!({ "city": "Austin", "hours": 48 })),
            &WeatherConfig::default(),
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Failed to get forecast: WEATHER_API_KEY not set"
        );
    }

    #[tokio::test]
    async fn test_upstream_404_is_error_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("q", "Atlantis"))
            .respond_with(ResponseTemplate::new(404).set_body_string("city not found"))
            .expect(1)
            .mount(&server)
            .await;

        let config = WeatherConfig::with_api_key(server.uri(), "k");
        let result = GetForecastTool::call(args(json!({ "city": "Atlantis" })), &config).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Failed to get forecast: API error (404): city not found"
        );
    }
}
