//! Weather Station Data
//!
//! Looks up daily GHCN observations for one station through the backend
//! API and shows them as a table and a line chart per element.
//!
//! Flow:
//! 1. On mount the status poller checks `/api/status`. While the backend is
//!    still downloading or parsing its archive, a blocking overlay shows the
//!    progress and the search button stays disabled; the poller re-checks
//!    until the backend is ready.
//! 2. Submitting the form validates the station id, fetches
//!    `/api/station/{id}` with the optional filters and shows the results,
//!    the empty state or an error.
//! 3. A 503 from the station endpoint sends the page back to step 1.

use dioxus::prelude::*;
use ghcn_chart_ui::components::{
    ChartHeader, ErrorDisplay, LoadingSpinner, NoResults, ResultsTable, SearchPanel, StatusOverlay,
};
use ghcn_chart_ui::js_bridge;
use ghcn_chart_ui::poller::StatusPoller;
use ghcn_chart_ui::state::AppState;
use ghcn_client::search::SearchView;

/// Element the app mounts into.
const ROOT_ID: &str = "station-search-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Runs once: load the chart glue and start watching backend readiness.
    use_hook(move || {
        log::info!("starting station search");
        js_bridge::init_charts();
        StatusPoller::new(state).check();
    });

    let view = state.search.read().view().clone();

    rsx! {
        div {
            style: "padding: 16px; max-width: 1100px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Weather Station Data".to_string(),
                subtitle: "Daily observations from NOAA GHCN-Daily. Values are in GHCN units (tenths of mm, tenths of degrees C, mm).".to_string(),
            }

            StatusOverlay {}
            SearchPanel {}

            {match view {
                SearchView::Idle => rsx! {},
                SearchView::Loading => rsx! { LoadingSpinner {} },
                SearchView::Results(results) => rsx! { ResultsTable { results } },
                SearchView::NoResults => rsx! { NoResults {} },
                SearchView::Error(message) => rsx! { ErrorDisplay { message } },
            }}
        }
    }
}
