//! Client configuration.

use crate::query::StationQuery;

/// Status polling cadence while the backend reports "not ready".
pub const READY_POLL_INTERVAL_MS: u32 = 2000;

/// Slower cadence used after the status request itself failed.
pub const ERROR_POLL_INTERVAL_MS: u32 = 5000;

pub const STATUS_PATH: &str = "/api/status";

/// Where the API lives and how often to poll it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API paths. Empty means same origin as the page.
    pub api_base: String,
    pub ready_poll_ms: u32,
    pub error_poll_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            ready_poll_ms: READY_POLL_INTERVAL_MS,
            error_poll_ms: ERROR_POLL_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    pub fn status_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), STATUS_PATH)
    }

    pub fn station_url(&self, query: &StationQuery) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), query.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchForm;

    #[test]
    fn urls_are_same_origin_by_default() {
        let config = ClientConfig::default();
        assert_eq!(config.status_url(), "/api/status");
        let query = StationQuery::from_form(&SearchForm {
            station_id: "USW00094728".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.station_url(&query), "/api/station/USW00094728");
    }

    #[test]
    fn api_base_trailing_slash_is_ignored() {
        let config = ClientConfig {
            api_base: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.status_url(), "http://localhost:8080/api/status");
    }
}
