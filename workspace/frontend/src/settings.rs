use log::Level;
use web_sys::window;

/// Where plotly.js is fetched from when the page has not loaded it already.
pub const DEFAULT_CHART_LIBRARY_URL: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const STORAGE_API_BASE: &str = "skycast_api_base";
const STORAGE_CHART_LIBRARY_URL: &str = "skycast_chart_library_url";
const STORAGE_LOG_LEVEL: &str = "skycast_log_level";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Prefix prepended to API paths. Empty means same origin as the page.
    pub api_base: String,

    /// Script URL for the charting library
    pub chart_library_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            chart_library_url: DEFAULT_CHART_LIBRARY_URL.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_base)) = storage.get_item(STORAGE_API_BASE) {
                settings.api_base = api_base;
            }

            if let Ok(Some(url)) = storage.get_item(STORAGE_CHART_LIBRARY_URL) {
                if !url.trim().is_empty() {
                    settings.chart_library_url = url;
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(STORAGE_LOG_LEVEL) {
                settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
            }
        }

        settings
    }

    /// Full URL for an API path such as `/api/forecast`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
