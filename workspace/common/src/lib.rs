//! Transport and presentation types shared by the SkyCast frontend.
//!
//! The forecast endpoint is an external service; the structs in [`forecast`]
//! mirror its JSON payload so the frontend can deserialize it directly.
//! [`display`] and [`chart`] turn that payload into the strings and series
//! the view renders, and stay free of any browser dependency so they can be
//! tested natively.

pub mod chart;
pub mod display;
pub mod forecast;

pub use chart::{ForecastSeries, LineDash, SeriesStyle, SERIES_STYLES};
pub use display::{CardView, ForecastRow, PastWeekRow, PLACEHOLDER};
pub use forecast::{
    DailyForecast, ForecastRequest, ForecastResponse, PastDay, WeatherData, WeatherMetrics,
    UNKNOWN_ERROR,
};
