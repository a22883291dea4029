use common::{CardView, WeatherData};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: WeatherData,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &Props) -> Html {
    let card = CardView::from(&props.data);

    html! {
        <div class="card weather-card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div>
                        <h2 class="city card-title">{&card.city}</h2>
                        <div class="desc text-sm text-gray-500">{&card.description}</div>
                    </div>
                    <div class="flex items-center gap-2">
                        {
                            if let Some(icon_url) = &card.icon_url {
                                html! { <img src={icon_url.clone()} width="64" height="64" alt="icon" /> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="text-right">
                            <div class="temp text-2xl font-bold">{&card.temperature}</div>
                            <div class="small text-xs text-gray-500">{&card.feels_like}</div>
                        </div>
                    </div>
                </div>
                {
                    if let Some(metrics) = &card.metrics {
                        html! { <div class="metrics small text-xs text-gray-500 mt-2">{metrics}</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="mt-4 flex justify-between items-center">
                    <div class="small text-sm text-gray-500">{"Model prediction (tomorrow)"}</div>
                    <div class="predict text-xl font-extrabold">{&card.prediction}</div>
                </div>
            </div>
        </div>
    }
}
