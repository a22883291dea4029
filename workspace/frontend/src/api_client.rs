use common::{ForecastRequest, ForecastResponse};
use gloo_net::http::Request;
use thiserror::Error;

use crate::settings;

/// Number of future days requested from the forecast endpoint.
pub const FORECAST_HORIZON_DAYS: u32 = 7;

pub const FORECAST_PATH: &str = "/api/forecast";

/// Failures below the application level: the request never completed or
/// the body was not a forecast envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("failed to serialize request: {0}")]
    Serialize(String),

    #[error("{0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Forecast URL for the configured API base, horizon included.
pub fn forecast_url(settings: &settings::AppSettings) -> String {
    format!(
        "{}?days={}",
        settings.api_url(FORECAST_PATH),
        FORECAST_HORIZON_DAYS
    )
}

/// Posts `{city}` to the forecast endpoint.
///
/// The endpoint reports application errors with a 4xx/5xx status and a
/// normal envelope, so the body is parsed whatever the status. No timeout
/// and no retry: the call waits until the browser settles it.
pub async fn fetch_forecast(city: &str) -> Result<ForecastResponse, ForecastError> {
    let url = forecast_url(&settings::get_settings());
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(&ForecastRequest::new(city))
        .map_err(|e| {
            let error = ForecastError::Serialize(e.to_string());
            log::error!("POST {} - {}", FORECAST_PATH, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = ForecastError::Transport(e.to_string());
            log::error!("POST {} - Request failed: {}", FORECAST_PATH, error);
            error
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", FORECAST_PATH, response.status());
    }

    log::trace!("POST {} - Response received, parsing JSON", FORECAST_PATH);
    let body: ForecastResponse = response.json().await.map_err(|e| {
        let error = ForecastError::Parse(e.to_string());
        log::error!("POST {} - {}", FORECAST_PATH, error);
        error
    })?;

    if body.success {
        log::info!("POST {} - Success for '{}'", FORECAST_PATH, city);
    } else {
        log::warn!("POST {} - API error: {:?}", FORECAST_PATH, body.error);
    }

    Ok(body)
}
