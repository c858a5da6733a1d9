//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::fetch::BrowserApi;
use ghcn_client::config::ClientConfig;
use ghcn_client::query::SearchForm;
use ghcn_client::search::SearchController;
use ghcn_client::status::StatusTracker;
use dioxus::prelude::*;
use dioxus::core::Task;

/// Shared state of the station search page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client used by the poller and the search
    pub api: Signal<BrowserApi>,
    /// Readiness overlay, submit enablement and poll cadence
    pub status: Signal<StatusTracker>,
    /// The one running status re-check loop, if any
    pub poll_task: Signal<Option<Task>>,
    /// Current values of the search form fields
    pub form: Signal<SearchForm>,
    /// Request tokens and the result panel to show
    pub search: Signal<SearchController>,
}

impl AppState {
    /// Create a new AppState with the default same-origin configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            status: Signal::new(StatusTracker::new(&config)),
            api: Signal::new(BrowserApi::new(config)),
            poll_task: Signal::new(None),
            form: Signal::new(SearchForm::default()),
            search: Signal::new(SearchController::new()),
        }
    }
}
