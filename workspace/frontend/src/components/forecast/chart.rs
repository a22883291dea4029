use common::{DailyForecast, ForecastSeries, LineDash};
use plotly::common::{DashType, Line, LineShape, Mode, Orientation};
use plotly::layout::{Axis, Legend, RangeMode};
use plotly::{Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::dom::CHART_ID;
use crate::chart_loader::{self, ChartError};
use crate::settings;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(
        div: &HtmlElement,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div: &HtmlElement) -> Result<JsValue, JsValue>;
}

/// A plot drawn into a container. Dropping the handle purges the plot, so at
/// most one plot instance lives in the container at a time.
struct PlotHandle {
    container: HtmlElement,
}

impl PlotHandle {
    fn draw(container: HtmlElement, series: &ForecastSeries) -> Result<Self, ChartError> {
        let traces = js_sys::Array::new();
        for trace in build_traces(series) {
            traces.push(&to_js(&trace)?);
        }
        let layout = to_js(&build_layout())?;
        let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;

        new_plot(&container, traces.into(), layout, config)
            .map_err(|e| ChartError::Draw(format!("{:?}", e)))?;
        log::debug!("Forecast chart drawn with {} labels", series.labels.len());

        Ok(Self { container })
    }
}

impl Drop for PlotHandle {
    fn drop(&mut self) {
        log::trace!("Purging forecast chart");
        if let Err(e) = purge(&self.container) {
            log::warn!("Failed to purge forecast chart: {:?}", e);
        }
    }
}

fn dash_type(dash: LineDash) -> DashType {
    match dash {
        LineDash::Solid => DashType::Solid,
        LineDash::Dot => DashType::Dot,
        LineDash::Dash => DashType::Dash,
    }
}

/// One smoothed line per series. `None` points serialize as `null` and
/// `connect_gaps` spans them.
fn build_traces(series: &ForecastSeries) -> Vec<Box<Scatter<String, Option<f64>>>> {
    series
        .series()
        .into_iter()
        .map(|(style, points)| {
            Scatter::new(series.labels.clone(), points.to_vec())
                .mode(Mode::Lines)
                .name(style.label)
                .connect_gaps(true)
                .line(
                    Line::new()
                        .color(style.color)
                        .width(2.0)
                        .shape(LineShape::Spline)
                        .dash(dash_type(style.dash)),
                )
        })
        .collect()
}

fn build_layout() -> Layout {
    Layout::new()
        .show_legend(true)
        .legend(Legend::new().orientation(Orientation::Horizontal).x(0.0).y(-0.2))
        // Fit the data instead of anchoring the axis at zero.
        .y_axis(Axis::new().auto_range(true).range_mode(RangeMode::Normal))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ChartError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChartError::Draw(e.to_string()))
}

/// Counts chart effects. A draw proceeds only while its ticket is current.
#[derive(Debug, Default)]
struct DrawGeneration(u64);

impl DrawGeneration {
    fn next_ticket(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }

    fn invalidate(&mut self) {
        self.0 += 1;
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub daily: Vec<DailyForecast>,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let plot = use_mut_ref(|| None::<PlotHandle>);
    let generation = use_mut_ref(DrawGeneration::default);
    let failure = use_state_eq(|| None::<String>);

    {
        let container_ref = container_ref.clone();
        let failure = failure.clone();

        use_effect_with(props.daily.clone(), move |daily| {
            let series = ForecastSeries::from_daily(daily);
            let ticket = generation.borrow_mut().next_ticket();
            let url = settings::get_settings().chart_library_url;

            {
                let plot = plot.clone();
                let generation = generation.clone();

                spawn_local(async move {
                    let loaded = chart_loader::ensure_chart_library(&url).await;

                    // Newer data arrived, or the chart unmounted, while the library loaded.
                    if !generation.borrow().is_current(ticket) {
                        log::debug!("Skipping stale forecast chart draw");
                        return;
                    }

                    plot.borrow_mut().take();
                    let drawn = loaded.and_then(|()| {
                        let container = container_ref.cast::<HtmlElement>().ok_or_else(|| {
                            ChartError::Draw("chart container is not mounted".to_string())
                        })?;
                        PlotHandle::draw(container, &series)
                    });

                    match drawn {
                        Ok(handle) => {
                            *plot.borrow_mut() = Some(handle);
                            failure.set(None);
                        }
                        Err(err) => {
                            log::error!("Forecast chart not rendered: {}", err);
                            failure.set(Some(err.to_string()));
                        }
                    }
                });
            }

            move || {
                generation.borrow_mut().invalidate();
                plot.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="chart-container">
            {
                if let Some(reason) = &*failure {
                    html! { <div class="small text-sm text-gray-500">{format!("Chart unavailable: {}", reason)}</div> }
                } else {
                    html! {}
                }
            }
            <div ref={container_ref} id={CHART_ID} style="width:100%; height:320px;"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily() -> Vec<DailyForecast> {
        vec![
            DailyForecast {
                date: "2026-10-20".to_string(),
                avg_temp: Some(12.0),
                predicted_temp: Some(13.5),
                ..Default::default()
            },
            DailyForecast {
                date: "2026-10-21".to_string(),
                avg_temp: None,
                predicted_temp: Some(12.5),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_traces_span_gaps_with_null() {
        let series = ForecastSeries::from_daily(&daily());
        let traces = build_traces(&series);
        assert_eq!(traces.len(), 4);

        let avg_c = serde_json::to_value(&traces[0]).unwrap();
        assert_eq!(avg_c["name"], "Avg temp (°C)");
        assert_eq!(avg_c["connectgaps"], true);
        assert_eq!(avg_c["y"], serde_json::json!([12.0, null]));
        assert_eq!(avg_c["x"], serde_json::json!(["2026-10-20", "2026-10-21"]));
        assert_eq!(avg_c["line"]["shape"], "spline");
    }

    #[test]
    fn test_secondary_series_are_dashed() {
        let series = ForecastSeries::from_daily(&daily());
        let traces = build_traces(&series);

        let predicted_f = serde_json::to_value(&traces[3]).unwrap();
        assert_eq!(predicted_f["name"], "Predicted (°F)");
        assert_eq!(predicted_f["line"]["dash"], "dash");
        assert_eq!(predicted_f["y"], serde_json::json!([null, null]));
    }

    #[test]
    fn test_only_latest_draw_is_current() {
        let mut generation = DrawGeneration::default();
        let first = generation.next_ticket();
        let second = generation.next_ticket();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_unmount_invalidates_pending_draw() {
        let mut generation = DrawGeneration::default();
        let ticket = generation.next_ticket();

        generation.invalidate();

        assert!(!generation.is_current(ticket));
        let redraw = generation.next_ticket();
        assert!(generation.is_current(redraw));
    }

    #[test]
    fn test_layout_is_not_zero_based_and_legend_below() {
        let layout = serde_json::to_value(build_layout()).unwrap();
        assert_eq!(layout["yaxis"]["rangemode"], "normal");
        assert_eq!(layout["legend"]["orientation"], "h");
        assert!(layout["legend"]["y"].as_f64().unwrap() < 0.0);
    }
}
