use yew::prelude::*;

mod components;
pub mod api_client;
pub mod chart_loader;
pub mod settings;
pub mod state;

use components::forecast::ForecastView;

/// Id of the element the application mounts into.
pub const APP_ROOT_ID: &str = "app";

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="container mx-auto max-w-5xl p-6 flex flex-col gap-6">
            <header>
                <h1 class="text-3xl font-bold">{"SkyCast"}</h1>
                <p class="text-sm text-gray-500">{"Current conditions, a 7-day outlook and last week's averages."}</p>
            </header>
            <ForecastView />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SkyCast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Forecast URL: {}", api_client::forecast_url(&settings));

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(APP_ROOT_ID));

    match root {
        Some(root) => {
            log::trace!("Mounting into #{}", APP_ROOT_ID);
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            log::warn!("No #{} element found, mounting into <body>", APP_ROOT_ID);
            yew::Renderer::<App>::new().render();
        }
    }
    log::info!("Application initialized successfully");
}
