//! JSON bodies captured from the weather data API.

// GET /api/station/USW00094728?startDate=20240101&endDate=20240102
pub const STATION_RESPONSE: &str = r#"{
  "stationId": "USW00094728",
  "count": 3,
  "data": [
    {"stationId":"USW00094728","date":"20240101","element":"TMAX","value":"56","sFlag":"W","obsTime":"0700"},
    {"stationId":"USW00094728","date":"20240101","element":"PRCP","value":"bad","qFlag":"I","sFlag":"W"},
    {"stationId":"USW00094728","date":"20240102","element":"TMAX","value":25}
  ],
  "startDate": "20240101",
  "endDate": "20240102"
}"#;

// GET /api/status while the yearly archive is downloading
pub const STATUS_DOWNLOADING: &str = r#"{
  "ready": false,
  "status": "initializing",
  "message": "Downloading weather data file (50.0%)",
  "progress": {
    "status": "Downloading",
    "isDownloading": true,
    "downloadedBytes": 524288,
    "totalBytes": 1048576,
    "downloadPercent": 50
  }
}"#;

// GET /api/status while lines are being parsed
pub const STATUS_PROCESSING: &str = r#"{
  "ready": false,
  "status": "initializing",
  "message": "Processing weather data (21.0%)",
  "progress": {
    "status": "Processing",
    "processedLines": 1234567,
    "totalLines": 5878000,
    "processedStations": 38211,
    "percentComplete": 21
  }
}"#;

pub const STATUS_READY: &str = r#"{"ready":true,"status":"ready"}"#;
