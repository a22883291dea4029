use common::WeatherData;
use yew::prelude::*;

use super::{ForecastChart, ForecastStrip, PastWeekTable, WeatherCard};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: WeatherData,
}

/// Everything the result area shows after a successful lookup.
#[function_component(ForecastResult)]
pub fn forecast_result(props: &Props) -> Html {
    let data = &props.data;

    html! {
        <>
            <WeatherCard data={data.clone()} />
            <div class="card chart-layout bg-base-100 shadow mt-4">
                <div class="card-body grid grid-cols-1 md:grid-cols-3 gap-4">
                    <ForecastStrip daily={data.daily.clone()} />
                    <div class="md:col-span-2">
                        <ForecastChart daily={data.daily.clone()} />
                    </div>
                </div>
            </div>
            {
                if data.has_past_week() {
                    html! { <PastWeekTable past_week={data.past_week.clone()} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
