use serde::{Deserialize, Deserializer, Serialize};

/// Message shown when the endpoint reports a failure without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Body of `POST /api/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRequest {
    pub city: String,
}

impl ForecastRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Envelope returned by the forecast endpoint, on success and on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ForecastResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_data: Option<WeatherData>,
}

impl ForecastResponse {
    /// Collapses the envelope into the data to render or the message to show.
    ///
    /// A blank or missing `error` falls back to [`UNKNOWN_ERROR`], and so does
    /// a response that claims success but carries no data.
    pub fn into_outcome(self) -> Result<WeatherData, String> {
        match (self.success, self.weather_data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string())),
        }
    }
}

/// Current conditions plus the forecast and history for one city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeatherData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub feels_like_f: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub predicted_temp: Option<f64>,
    #[serde(default)]
    pub predicted_temp_f: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily: Vec<DailyForecast>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub past_week: Vec<PastDay>,
    #[serde(default)]
    pub metrics: Option<WeatherMetrics>,
    /// Why the history lookup failed, when it did. The rest of the payload is still valid.
    #[serde(default)]
    pub past_error: Option<String>,
}

impl WeatherData {
    pub fn has_past_week(&self) -> bool {
        !self.past_week.is_empty()
    }

    /// Icon URL if the upstream provided a non-empty one.
    pub fn icon(&self) -> Option<&str> {
        self.icon_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// One future day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyForecast {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub predicted_temp: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub avg_temp_f: Option<f64>,
    #[serde(default)]
    pub predicted_temp_f: Option<f64>,
    #[serde(default)]
    pub avg_humidity: Option<f64>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// One observed day from the past week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PastDay {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub avg_temp_f: Option<f64>,
}

/// Extra current-condition readings. Every reading is optional upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeatherMetrics {
    #[serde(default)]
    pub clouds: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub precipitation_1h: Option<f64>,
}

impl WeatherMetrics {
    pub fn is_empty(&self) -> bool {
        self.clouds.is_none() && self.wind_speed.is_none() && self.precipitation_1h.is_none()
    }
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
