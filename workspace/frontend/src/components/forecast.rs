mod card;
mod chart;
mod past_week;
mod result;
mod strip;
mod view;

pub use card::WeatherCard;
pub use chart::ForecastChart;
pub use past_week::PastWeekTable;
pub use result::ForecastResult;
pub use strip::ForecastStrip;
pub use view::ForecastView;

/// Element ids the page stylesheet and any embedding script rely on.
pub mod dom {
    pub const FORM_ID: &str = "search-form";
    pub const CITY_INPUT_ID: &str = "city-input";
    pub const STATUS_BOX_ID: &str = "status-box";
    pub const RESULT_BOX_ID: &str = "result-box";
    pub const CHART_ID: &str = "forecast-chart";
}
