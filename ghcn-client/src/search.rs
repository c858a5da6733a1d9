//! Search submission and result handling.
//!
//! Every accepted submission gets a fresh [`RequestToken`]. A response is
//! only applied if it carries the latest token, so a slow earlier search
//! can never overwrite the panels of a newer one.

use crate::api::WeatherApi;
use crate::error::{ApiError, QueryError};
use crate::observation::{ObservationRecord, StationResponse, TableRow};
use crate::query::{SearchForm, StationQuery};

/// Monotonically increasing id of an issued search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

/// Table rows plus the raw records the chart is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct StationResults {
    pub station_id: String,
    pub rows: Vec<TableRow>,
    pub records: Vec<ObservationRecord>,
}

impl From<StationResponse> for StationResults {
    fn from(response: StationResponse) -> Self {
        StationResults {
            rows: response.rows(),
            station_id: response.station_id,
            records: response.data,
        }
    }
}

/// Which panel the results area shows. Exactly one at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchView {
    #[default]
    Idle,
    Loading,
    Results(StationResults),
    NoResults,
    Error(String),
}

/// A validated search waiting for its response.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub token: RequestToken,
    pub query: StationQuery,
}

/// What the caller has to do after a response was folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results are showing; draw the chart from them.
    Render,
    NoResults,
    Failed,
    /// Backend is still ingesting: run the status check again.
    RecheckStatus,
    /// A newer search was issued; the response was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct SearchController {
    latest: RequestToken,
    view: SearchView,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Validate the form and start a search.
    ///
    /// On a validation error the error panel is shown and any search still
    /// in flight is invalidated; no request should be made.
    pub fn submit(&mut self, form: &SearchForm) -> Result<PendingSearch, QueryError> {
        self.latest = self.latest.next();
        match StationQuery::from_form(form) {
            Ok(query) => {
                log::info!("search #{} for {}", self.latest.0, query.path());
                self.view = SearchView::Loading;
                Ok(PendingSearch {
                    token: self.latest,
                    query,
                })
            }
            Err(e) => {
                log::warn!("search rejected: {}", e);
                self.view = SearchView::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Fold the response of search `token` into the view.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<StationResponse, ApiError>,
    ) -> SearchOutcome {
        if token != self.latest {
            log::debug!(
                "dropping response for search #{}, latest is #{}",
                token.0,
                self.latest.0
            );
            return SearchOutcome::Stale;
        }

        match result {
            Ok(response) if response.has_records() => {
                log::info!(
                    "search #{} returned {} records for {}",
                    token.0,
                    response.data.len(),
                    response.station_id
                );
                self.view = SearchView::Results(response.into());
                SearchOutcome::Render
            }
            Ok(_) => {
                self.view = SearchView::NoResults;
                SearchOutcome::NoResults
            }
            Err(ApiError::NotReady) => {
                log::warn!("search #{}: backend still initializing", token.0);
                self.view = SearchView::Idle;
                SearchOutcome::RecheckStatus
            }
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                self.view = SearchView::Error(format!("Error: {}", e));
                SearchOutcome::Failed
            }
        }
    }
}

/// Run the request for a pending search.
pub async fn execute<A: WeatherApi>(
    api: &A,
    pending: &PendingSearch,
) -> Result<StationResponse, ApiError> {
    api.station(&pending.query).await
}
