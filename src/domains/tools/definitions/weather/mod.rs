//! Weather tools module.
//!
//! Tools backed by the OpenWeatherMap 2.5 API:
//! - `current`: current conditions for a city (`get_weather`)
//! - `forecast`: 3-hour step forecast for a city (`get_forecast`)
//!
//! Both share the HTTP client (`client`), the wire/snapshot types
//! (`models`), the text rendering (`report`) and argument helpers (`common`).

pub mod client;
pub mod common;
pub mod current;
pub mod forecast;
pub mod models;
pub mod report;

pub use client::OpenWeatherClient;
pub use current::{GetWeatherParams, GetWeatherTool};
pub use forecast::{GetForecastParams, GetForecastTool};
pub use models::{CurrentConditions, ForecastEntry, ForecastSeries};
