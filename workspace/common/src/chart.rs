//! Series plotted by the forecast chart.
//!
//! Points are kept as `Option<f64>` all the way to the plotting library so a
//! missing reading becomes a gap that the line spans, not a zero.

use crate::forecast::DailyForecast;

/// Stroke pattern of a series line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dot,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub dash: LineDash,
}

/// Styles in plotting order: average °C, average °F, predicted °C, predicted °F.
pub const SERIES_STYLES: [SeriesStyle; 4] = [
    SeriesStyle {
        label: "Avg temp (°C)",
        color: "#2563eb",
        dash: LineDash::Solid,
    },
    SeriesStyle {
        label: "Avg temp (°F)",
        color: "#60a5fa",
        dash: LineDash::Dot,
    },
    SeriesStyle {
        label: "Predicted (°C)",
        color: "#f97316",
        dash: LineDash::Dash,
    },
    SeriesStyle {
        label: "Predicted (°F)",
        color: "#fb923c",
        dash: LineDash::Dash,
    },
];

/// Date labels and the four temperature series, all the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    pub labels: Vec<String>,
    pub avg_c: Vec<Option<f64>>,
    pub avg_f: Vec<Option<f64>>,
    pub predicted_c: Vec<Option<f64>>,
    pub predicted_f: Vec<Option<f64>>,
}

impl ForecastSeries {
    pub fn from_daily(daily: &[DailyForecast]) -> Self {
        // Non-finite readings are gaps too.
        let point = |value: Option<f64>| value.filter(|v| v.is_finite());

        Self {
            labels: daily.iter().map(|d| d.date.clone()).collect(),
            avg_c: daily.iter().map(|d| point(d.avg_temp)).collect(),
            avg_f: daily.iter().map(|d| point(d.avg_temp_f)).collect(),
            predicted_c: daily.iter().map(|d| point(d.predicted_temp)).collect(),
            predicted_f: daily.iter().map(|d| point(d.predicted_temp_f)).collect(),
        }
    }

    /// Each series paired with its style, in [`SERIES_STYLES`] order.
    pub fn series(&self) -> [(SeriesStyle, &[Option<f64>]); 4] {
        [
            (SERIES_STYLES[0], self.avg_c.as_slice()),
            (SERIES_STYLES[1], self.avg_f.as_slice()),
            (SERIES_STYLES[2], self.predicted_c.as_slice()),
            (SERIES_STYLES[3], self.predicted_f.as_slice()),
        ]
    }
}
