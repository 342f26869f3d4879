//! OpenWeatherMap response shapes and the snapshots built from them.
//!
//! The `Ow*` structs mirror the wire format. Every field defaults when absent
//! (the API drops `gust` in calm weather, for example); a field with the
//! wrong JSON type is still a decode error.

use serde::Deserialize;

/// Condition label used when the upstream `weather` list is empty.
pub const DEFAULT_CONDITION: &str = "Clear";

/// Description used alongside [`DEFAULT_CONDITION`] for current conditions.
pub const DEFAULT_DESCRIPTION: &str = "clear sky";

// ============================================================================
// Wire Format
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwCondition {
    main: String,
    description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u32,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwWind {
    speed: f64,
    gust: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwClouds {
    all: u32,
}

/// Body of `GET /weather`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwCondition>,
    wind: OwWind,
    clouds: OwClouds,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwCondition>,
    wind: OwWind,
    /// Probability of precipitation, 0.0 to 1.0.
    pop: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwCity {
    name: String,
}

/// Body of `GET /forecast`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
    city: OwCity,
}

// ============================================================================
// Snapshots
// ============================================================================

/// Current conditions for one city, as reported at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u32,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub cloud_cover: u32,
    /// Primary condition label, e.g. "Clouds".
    pub condition: String,
    /// Free-text description, e.g. "broken clouds".
    pub description: String,
}

impl From<OwCurrentResponse> for CurrentConditions {
    fn from(response: OwCurrentResponse) -> Self {
        let (condition, description) = match response.weather.into_iter().next() {
            Some(first) => (first.main, first.description),
            None => (
                DEFAULT_CONDITION.to_string(),
                DEFAULT_DESCRIPTION.to_string(),
            ),
        };

        Self {
            city: response.name,
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            temp_min: response.main.temp_min,
            temp_max: response.main.temp_max,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
            wind_gust: response.wind.gust,
            cloud_cover: response.clouds.all,
            condition,
            description,
        }
    }
}

/// One 3-hour forecast step.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Timestamp text exactly as sent upstream (`dt_txt`).
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: u32,
    pub description: String,
    pub wind_speed: f64,
    /// Probability of precipitation, 0.0 to 1.0.
    pub precipitation_probability: f64,
}

impl From<OwForecastEntry> for ForecastEntry {
    fn from(entry: OwForecastEntry) -> Self {
        let description = entry
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .unwrap_or_else(|| DEFAULT_CONDITION.to_string());

        Self {
            timestamp: entry.dt_txt,
            temperature: entry.main.temp,
            humidity: entry.main.humidity,
            description,
            wind_speed: entry.wind.speed,
            precipitation_probability: entry.pop,
        }
    }
}

/// Forecast steps for one city, in upstream (chronological) order.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub city: String,
    pub entries: Vec<ForecastEntry>,
}

impl From<OwForecastResponse> for ForecastSeries {
    fn from(response: OwForecastResponse) -> Self {
        Self {
            city: response.city.name,
            entries: response.list.into_iter().map(ForecastEntry::from).collect(),
        }
    }
}
