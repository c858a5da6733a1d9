//! Contract for the weather data API and decoding of its responses.
//!
//! The browser implementation lives in `ghcn-chart-ui`; tests use an
//! in-memory fake. Both share the status-code and body handling here.

use crate::error::ApiError;
use crate::observation::StationResponse;
use crate::query::StationQuery;
use crate::status::StatusSnapshot;

/// The two endpoints the UI talks to.
#[allow(async_fn_in_trait)]
pub trait WeatherApi {
    /// `GET /api/status`
    async fn status(&self) -> Result<StatusSnapshot, ApiError>;

    /// `GET /api/station/{stationId}{?query}`
    async fn station(&self, query: &StationQuery) -> Result<StationResponse, ApiError>;
}

/// Decode a status body. The HTTP status is not consulted: whatever JSON
/// the endpoint returns is taken as the snapshot.
pub fn decode_status(body: &str) -> Result<StatusSnapshot, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Map a station endpoint HTTP status to an error, if it is one.
/// 503 means the backend is still ingesting data.
pub fn check_station_status(code: u16) -> Result<(), ApiError> {
    match code {
        200..=299 => Ok(()),
        503 => Err(ApiError::NotReady),
        code => Err(ApiError::Http(code)),
    }
}

pub fn decode_station(code: u16, body: &str) -> Result<StationResponse, ApiError> {
    check_station_status(code)?;
    Ok(serde_json::from_str(body)?)
}
