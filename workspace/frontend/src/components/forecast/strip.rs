use common::display::{forecast_heading, forecast_rows, NO_FORECAST_MESSAGE};
use common::DailyForecast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub daily: Vec<DailyForecast>,
}

/// One row per forecast day: date, predicted temperature, description.
#[function_component(ForecastStrip)]
pub fn forecast_strip(props: &Props) -> Html {
    let rows = forecast_rows(&props.daily);

    html! {
        <div class="forecast-list">
            <div class="small text-sm text-gray-500 mb-2">{forecast_heading(rows.len())}</div>
            {
                if rows.is_empty() {
                    html! { <div class="small text-sm text-gray-500">{NO_FORECAST_MESSAGE}</div> }
                } else {
                    html! {
                        <>{for rows.into_iter().map(|row| html! {
                            <div class="forecast-item flex justify-between items-center gap-2 py-1">
                                <div class="forecast-date">{row.date}</div>
                                {
                                    if let Some(icon_url) = row.icon_url {
                                        html! { <img class="forecast-icon" src={icon_url} width="32" height="32" alt="icon" /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="forecast-temp font-semibold">{row.temperature}</div>
                                <div class="forecast-desc text-xs text-gray-500">{row.description}</div>
                            </div>
                        })}</>
                    }
                }
            }
        </div>
    }
}
