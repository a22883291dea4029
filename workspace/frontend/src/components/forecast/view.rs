use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::dom::{CITY_INPUT_ID, FORM_ID, RESULT_BOX_ID, STATUS_BOX_ID};
use super::ForecastResult;
use crate::api_client;
use crate::components::status::StatusArea;
use crate::state::{normalize_city, ViewState};

/// The city search form with its status and result areas.
#[function_component(ForecastView)]
pub fn forecast_view() -> Html {
    let state = use_state(ViewState::default);
    let input_ref = use_node_ref();

    let onsubmit = {
        let state = state.clone();
        let input_ref = input_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let raw = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let Some(city) = normalize_city(&raw) else {
                log::debug!("Ignoring submit with blank city");
                return;
            };

            log::info!("Requesting forecast for '{}'", city);
            state.set(ViewState::Loading);

            // In-flight requests are not cancelled; the last one to resolve wins.
            // Status and result both render from this one state, so they never mix.
            let state = state.clone();
            spawn_local(async move {
                let result = api_client::fetch_forecast(&city).await;
                state.set(ViewState::from_fetch(result));
            });
        })
    };

    html! {
        <div class="forecast-view flex flex-col gap-4">
            <form id={FORM_ID} class="join w-full" {onsubmit}>
                <input
                    ref={input_ref}
                    id={CITY_INPUT_ID}
                    type="text"
                    name="city"
                    class="input input-bordered join-item w-full"
                    placeholder="Enter a city name"
                    autocomplete="off"
                />
                <button type="submit" class="btn btn-primary join-item">
                    {"Get forecast"}
                </button>
            </form>
            <div id={STATUS_BOX_ID}>
                <StatusArea state={(*state).clone()} />
            </div>
            <div id={RESULT_BOX_ID}>
                {
                    if let Some(data) = state.data() {
                        html! { <ForecastResult data={data.clone()} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
