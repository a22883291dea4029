use common::{ForecastResponse, WeatherData};

use crate::api_client::ForecastError;

/// What the status and result areas currently show.
///
/// `Idle -> Loading -> (Loaded | Failed)`; the next submission goes back to
/// `Loading`. Overlapping submissions are not de-duplicated: the last
/// response to resolve sets the final state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(WeatherData),
    Failed(String),
}

impl ViewState {
    /// Maps the outcome of one forecast call to the state to render.
    pub fn from_fetch(result: Result<ForecastResponse, ForecastError>) -> Self {
        match result {
            Ok(response) => match response.into_outcome() {
                Ok(data) => {
                    if let Some(past_error) = &data.past_error {
                        log::warn!("Past week unavailable for {}: {}", data.city, past_error);
                    }
                    Self::Loaded(data)
                }
                Err(message) => Self::Failed(message),
            },
            Err(err) => Self::Failed(format!("Network error: {}", err)),
        }
    }

    pub fn data(&self) -> Option<&WeatherData> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Trimmed city name, or `None` when there is nothing to search for.
pub fn normalize_city(input: &str) -> Option<String> {
    let city = input.trim();
    (!city.is_empty()).then(|| city.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::UNKNOWN_ERROR;

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(normalize_city(""), None);
        assert_eq!(normalize_city("   \t\n"), None);
        assert_eq!(normalize_city("  New York "), Some("New York".to_string()));
    }

    #[test]
    fn test_success_loads_data() {
        let response = ForecastResponse {
            success: true,
            error: None,
            weather_data: Some(WeatherData {
                city: "Berlin".to_string(),
                ..Default::default()
            }),
        };

        let state = ViewState::from_fetch(Ok(response));
        assert_eq!(state.data().map(|d| d.city.as_str()), Some("Berlin"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_application_error_shows_server_text() {
        let response = ForecastResponse {
            success: false,
            error: Some("City not found".to_string()),
            weather_data: None,
        };

        let state = ViewState::from_fetch(Ok(response));
        assert_eq!(state.error(), Some("City not found"));
    }

    #[test]
    fn test_application_error_fallback() {
        let state = ViewState::from_fetch(Ok(ForecastResponse::default()));
        assert_eq!(state.error(), Some(UNKNOWN_ERROR));
    }

    #[test]
    fn test_transport_error_is_a_network_error() {
        let state = ViewState::from_fetch(Err(ForecastError::Transport(
            "Failed to fetch".to_string(),
        )));
        assert_eq!(state.error(), Some("Network error: Failed to fetch"));

        let state = ViewState::from_fetch(Err(ForecastError::Parse("expected value".to_string())));
        assert_eq!(
            state.error(),
            Some("Network error: failed to parse response: expected value")
        );
    }

    #[test]
    fn test_past_error_does_not_fail_the_view() {
        let response = ForecastResponse {
            success: true,
            error: None,
            weather_data: Some(WeatherData {
                city: "Rome".to_string(),
                past_error: Some("Historical API error: status 401".to_string()),
                ..Default::default()
            }),
        };

        let state = ViewState::from_fetch(Ok(response));
        assert!(state.data().is_some());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_overlapping_submissions_last_response_wins() {
        let found = |city: &str| {
            Ok(ForecastResponse {
                success: true,
                error: None,
                weather_data: Some(WeatherData {
                    city: city.to_string(),
                    ..Default::default()
                }),
            })
        };
        let not_found = || {
            Ok(ForecastResponse {
                success: false,
                error: Some("City not found".to_string()),
                weather_data: None,
            })
        };

        // Two submits, both set Loading, then the responses arrive in turn.
        let state = ViewState::Loading;
        assert_eq!(state.data(), None);
        let state = ViewState::from_fetch(not_found());
        assert_eq!(state.error(), Some("City not found"));
        let state = ViewState::from_fetch(found("Paris"));
        assert_eq!(state.data().map(|d| d.city.as_str()), Some("Paris"));
        assert_eq!(state.error(), None);

        let state = ViewState::from_fetch(found("Oslo"));
        assert!(state.data().is_some());
        let state = ViewState::from_fetch(not_found());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some("City not found"));
    }
}
