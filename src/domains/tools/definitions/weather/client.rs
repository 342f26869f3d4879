//! OpenWeatherMap HTTP client.
//!
//! Performs the GET, checks the status, and decodes the body. The API key and
//! base URL come from [`WeatherConfig`]; the client never reads the
//! environment itself.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::models::{
    CurrentConditions, ForecastSeries, OwCurrentResponse, OwForecastResponse,
};
use crate::core::config::WeatherConfig;
use crate::domains::tools::ToolError;

/// Units requested from the API; the reports print °F and mph.
const UNITS: &str = "imperial";

/// Client for the OpenWeatherMap 2.5 API.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`ToolError::MissingApiKey`] when no key is configured,
    /// before any request is made.
    pub fn new(config: &WeatherConfig) -> Result<Self, ToolError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ToolError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ToolError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch current conditions for `city`.
    pub async fn current(&self, city: &str) -> Result<CurrentConditions, ToolError> {
        let response: OwCurrentResponse = self.get_json("weather", city).await?;
        Ok(response.into())
    }

    /// Fetch the 3-hour step forecast for `city`.
    pub async fn forecast(&self, city: &str) -> Result<ForecastSeries, ToolError> {
        let response: OwForecastResponse = self.get_json("forecast", city).await?;
        Ok(response.into())
    }

    /// GET `{base}/{endpoint}` for a city and decode the JSON body.
    ///
    /// `endpoint` doubles as the resource name in error messages.
    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        city: &str,
    ) -> Result<T, ToolError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|source| {
                // The URL carries the API key in its query string.
                let source = source.without_url();
                warn!("Request to {} failed: {}", url, source);
                ToolError::Transport {
                    resource: endpoint,
                    source,
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ToolError::Transport {
                resource: endpoint,
                source: source.without_url(),
            })?;

        debug!("Upstream answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, endpoint);
            return Err(ToolError::upstream(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|source| ToolError::Decode {
            resource: endpoint,
            source,
        })
    }
}
