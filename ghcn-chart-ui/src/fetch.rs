//! `WeatherApi` over the browser `fetch` API, via `gloo-net`.

use ghcn_client::api::{decode_station, decode_status, WeatherApi};
use ghcn_client::config::ClientConfig;
use ghcn_client::error::ApiError;
use ghcn_client::observation::StationResponse;
use ghcn_client::query::StationQuery;
use ghcn_client::status::StatusSnapshot;
use gloo_net::http::Request;

/// Talks to the API on the page's origin (or `api_base`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserApi {
    config: ClientConfig,
}

impl BrowserApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

/// GET `url`, returning the HTTP status and the body text.
async fn get_text(url: &str) -> anyhow::Result<(u16, String)> {
    let resp = Request::get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    Ok((status, body))
}

fn transport(e: anyhow::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

impl WeatherApi for BrowserApi {
    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        let url = self.config.status_url();
        let (_, body) = get_text(&url).await.map_err(transport)?;
        decode_status(&body)
    }

    async fn station(&self, query: &StationQuery) -> Result<StationResponse, ApiError> {
        let url = self.config.station_url(query);
        log::debug!("GET {}", url);
        let (code, body) = get_text(&url).await.map_err(transport)?;
        decode_station(code, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_becomes_transport_error() {
        let err = transport(anyhow::anyhow!("NetworkError when attempting to fetch resource."));
        assert!(matches!(
            &err,
            ApiError::Transport(msg) if msg == "NetworkError when attempting to fetch resource."
        ));
    }
}
