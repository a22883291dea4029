//! On-demand loading of the plotly.js charting library.
//!
//! The library is only fetched when a chart is about to be drawn and the
//! page has not provided a global `Plotly` itself. Loading is single-flight:
//! every caller that arrives while the script is still downloading awaits the
//! same promise, so at most one `<script>` tag is in flight at a time. A failed
//! load removes its tag and returns to `Idle`, which lets the next submission
//! try again.

use std::cell::{Cell, RefCell};

use js_sys::{Function, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

const CHART_GLOBAL: &str = "Plotly";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("browser document is not available")]
    NoDocument,

    #[error("failed to load chart library from {url}")]
    Load { url: String },

    #[error("failed to draw chart: {0}")]
    Draw(String),
}

/// Load progress, generic over the handle of the load in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum LoaderState<P> {
    #[default]
    Idle,
    Loading(P),
    Ready,
}

impl<P: Clone + PartialEq> LoaderState<P> {
    /// Returns the load to wait on, or `None` when the library is usable now.
    ///
    /// Joins a load already in flight; otherwise `start` is called at most
    /// once and its handle becomes the load in flight.
    pub(crate) fn begin<E>(
        &mut self,
        library_present: bool,
        start: impl FnOnce() -> Result<P, E>,
    ) -> Result<Option<P>, E> {
        match self {
            Self::Loading(pending) => Ok(Some(pending.clone())),
            Self::Ready => Ok(None),
            Self::Idle if library_present => {
                *self = Self::Ready;
                Ok(None)
            }
            Self::Idle => {
                let pending = start()?;
                *self = Self::Loading(pending.clone());
                Ok(Some(pending))
            }
        }
    }

    /// Leaves `Loading` only if `pending` is still the load in flight.
    /// Returns whether the state changed.
    pub(crate) fn settle(&mut self, pending: &P, loaded: bool) -> bool {
        let in_flight = matches!(self, Self::Loading(current) if current == pending);
        if in_flight {
            *self = if loaded { Self::Ready } else { Self::Idle };
        }
        in_flight
    }
}

/// An injected `<script>` and the promise settling with it.
#[derive(Clone)]
struct PendingScript {
    id: u64,
    promise: Promise,
    script: HtmlScriptElement,
}

impl PartialEq for PendingScript {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

thread_local! {
    static LOADER: RefCell<LoaderState<PendingScript>> = RefCell::new(LoaderState::Idle);
    static NEXT_LOAD_ID: Cell<u64> = Cell::new(0);
}

/// True when `window.Plotly` is defined.
pub fn chart_library_present() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str(CHART_GLOBAL)).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Resolves once the charting library is usable, loading it from `url` if needed.
pub async fn ensure_chart_library(url: &str) -> Result<(), ChartError> {
    let pending = LOADER.with(|state| {
        state.borrow_mut().begin(chart_library_present(), || {
            log::info!("Loading chart library from {}", url);
            inject_script(url)
        })
    })?;

    let Some(pending) = pending else {
        return Ok(());
    };

    match JsFuture::from(pending.promise.clone()).await {
        Ok(_) => {
            LOADER.with(|state| state.borrow_mut().settle(&pending, true));
            log::debug!("Chart library ready");
            Ok(())
        }
        Err(_) => {
            let reset = LOADER.with(|state| state.borrow_mut().settle(&pending, false));
            if reset {
                pending.script.remove();
            }
            log::error!("Chart library failed to load from {}", url);
            Err(ChartError::Load { url: url.to_string() })
        }
    }
}

/// Appends `<script src=url>` to `<head>`; the promise settles on load or error.
fn inject_script(url: &str) -> Result<PendingScript, ChartError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ChartError::NoDocument)?;
    let head = document.head().ok_or(ChartError::NoDocument)?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
        .ok_or_else(|| ChartError::Load { url: url.to_string() })?;
    script.set_src(url);
    script.set_async(true);

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script)
        .map_err(|_| ChartError::Load { url: url.to_string() })?;

    let id = NEXT_LOAD_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    Ok(PendingScript { id, promise, script })
}
