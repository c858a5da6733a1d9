use thiserror::Error;

/// Failures talking to the weather data API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 503: ingestion has not finished yet.
    #[error("System is still initializing. Please wait and try again.")]
    NotReady,
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Network failure or anything else the browser reported.
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Client-side validation failures; no request is made for these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a station ID")]
    MissingStationId,
}
