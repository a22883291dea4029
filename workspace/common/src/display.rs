//! Text the forecast view renders.
//!
//! Every numeric field of the payload is optional. Formatting branches on
//! presence and prints [`PLACEHOLDER`] for a missing value, so the view never
//! has to coerce a missing number into something printable.

use crate::forecast::{DailyForecast, PastDay, WeatherData, WeatherMetrics};

pub const PLACEHOLDER: &str = "N/A";

pub const NO_FORECAST_MESSAGE: &str = "No forecast data available.";

/// Shortest decimal form of a reading. Matches browser number printing for
/// everyday magnitudes; very large or tiny values skip exponent notation.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            // -0 prints as "0" in the browser
            if v == 0.0 { "0".to_string() } else { v.to_string() }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}{}", format_value(Some(v)), unit),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_celsius(value: Option<f64>) -> String {
    with_unit(value, "°C")
}

pub fn format_fahrenheit(value: Option<f64>) -> String {
    with_unit(value, "°F")
}

pub fn format_percent(value: Option<f64>) -> String {
    with_unit(value, "%")
}

/// `"21.5°C / 70.7°F"`, with each side falling back independently.
pub fn format_dual(celsius: Option<f64>, fahrenheit: Option<f64>) -> String {
    format!("{} / {}", format_celsius(celsius), format_fahrenheit(fahrenheit))
}

pub fn forecast_heading(days: usize) -> String {
    format!("Next {} day(s)", days)
}

/// One line of the forecast strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub date: String,
    pub temperature: String,
    pub description: String,
    pub icon_url: Option<String>,
}

pub fn forecast_rows(daily: &[DailyForecast]) -> Vec<ForecastRow> {
    daily
        .iter()
        .map(|day| ForecastRow {
            date: day.date.clone(),
            temperature: format_celsius(day.predicted_temp),
            description: day.description.clone().unwrap_or_default(),
            icon_url: day.icon_url.clone().filter(|url| !url.is_empty()),
        })
        .collect()
}

/// One line of the past-week table.
#[derive(Debug, Clone, PartialEq)]
pub struct PastWeekRow {
    pub date: String,
    pub celsius: String,
    pub fahrenheit: String,
}

pub fn past_week_rows(past_week: &[PastDay]) -> Vec<PastWeekRow> {
    past_week
        .iter()
        .map(|day| PastWeekRow {
            date: day.date.clone(),
            celsius: format_celsius(day.avg_temp),
            fahrenheit: format_fahrenheit(day.avg_temp_f),
        })
        .collect()
}

/// Readings joined with `" • "`, or `None` when there is nothing to show.
pub fn metrics_summary(metrics: &WeatherMetrics) -> Option<String> {
    if metrics.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(clouds) = metrics.clouds {
        parts.push(format!("Clouds {}", format_percent(Some(clouds))));
    }
    if let Some(wind) = metrics.wind_speed {
        parts.push(format!("Wind {} m/s", format_value(Some(wind))));
    }
    if let Some(precipitation) = metrics.precipitation_1h {
        parts.push(format!("Precipitation {} mm/h", format_value(Some(precipitation))));
    }
    Some(parts.join(" • "))
}

/// Pre-formatted strings for the current-conditions card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub city: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub temperature: String,
    pub feels_like: String,
    pub prediction: String,
    pub metrics: Option<String>,
}

impl From<&WeatherData> for CardView {
    fn from(data: &WeatherData) -> Self {
        Self {
            city: data.city.clone(),
            description: data.description.clone(),
            icon_url: data.icon().map(str::to_string),
            temperature: format_dual(data.temp, data.temp_f),
            feels_like: format!(
                "Feels like {} • {} humidity",
                format_dual(data.feels_like, data.feels_like_f),
                format_percent(data.humidity)
            ),
            prediction: format_dual(data.predicted_temp, data.predicted_temp_f),
            metrics: data.metrics.as_ref().and_then(metrics_summary),
        }
    }
}
