//! Search form submission.

use crate::chart::ChartAdapter;
use crate::poller::StatusPoller;
use crate::state::AppState;
use dioxus::prelude::*;
use ghcn_client::search::{execute, SearchOutcome, SearchView};

/// Validate the form, fetch the station and show the outcome.
pub fn submit_search(mut state: AppState) {
    let form = state.form.peek().clone();
    let Ok(pending) = state.search.write().submit(&form) else {
        return;
    };

    spawn(async move {
        let api = state.api.peek().clone();
        let result = execute(&api, &pending).await;
        let outcome = state.search.write().complete(pending.token, result);

        match outcome {
            SearchOutcome::Render => {
                let records = match state.search.peek().view() {
                    SearchView::Results(results) => results.records.clone(),
                    _ => return,
                };
                ChartAdapter::default().render(&records);
            }
            SearchOutcome::RecheckStatus => StatusPoller::new(state).check(),
            SearchOutcome::NoResults | SearchOutcome::Failed => ChartAdapter::default().clear(),
            SearchOutcome::Stale => {}
        }
    });
}
