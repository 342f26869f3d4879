//! Plain-text weather reports.

use std::fmt::Write;

use super::models::{CurrentConditions, ForecastSeries};

/// Hours covered by one upstream forecast entry.
pub const HOURS_PER_ENTRY: u32 = 3;

/// Number of forecast entries to render for `hours`.
///
/// One entry per 3-hour step, at least one, never more than `available`.
pub fn entry_count(hours: u32, available: usize) -> usize {
    let wanted = (hours / HOURS_PER_ENTRY).max(1) as usize;
    wanted.min(available)
}

/// Format current conditions as a fixed seven-line block (no trailing newline).
pub fn current_report(current: &CurrentConditions) -> String {
    format!(
        "Weather for {}:\n  \
         Condition: {} ({})\n  \
         Temperature: {:.0}°F (feels like {:.0}°F)\n  \
         High: {:.0}°F / Low: {:.0}°F\n  \
         Humidity: {}%\n  \
         Wind: {:.1} mph (gusts: {:.1} mph)\n  \
         Cloud cover: {}%",
        current.city,
        current.condition,
        current.description,
        current.temperature,
        current.feels_like,
        current.temp_max,
        current.temp_min,
        current.humidity,
        current.wind_speed,
        current.wind_gust,
        current.cloud_cover,
    )
}

/// Format a forecast: a header naming the requested `hours`, then one line per
/// entry in upstream order. Every line ends with a newline.
pub fn forecast_report(series: &ForecastSeries, hours: u32) -> String {
    let mut out = format!("Forecast for {} (next {} hours):\n", series.city, hours);

    let count = entry_count(hours, series.entries.len());
    for entry in series.entries.iter().take(count) {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "  {}: {:.0}°F, {}, wind {:.1} mph, rain chance {:.0}%",
            entry.timestamp,
            entry.temperature,
            entry.description,
            entry.wind_speed,
            entry.precipitation_probability * 100.0,
        );
    }

    out
}
