use ghcn_utils::dates::{format_date_for_display, format_obs_time};
use ghcn_utils::numbers::parse_leading_float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record value as sent by the API: usually a string, sometimes a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Number(serde_json::Number),
    Text(String),
}

impl RecordValue {
    /// Numeric reading of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RecordValue::Number(n) => n.as_f64(),
            RecordValue::Text(s) => parse_leading_float(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecordValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Number(n) => write!(f, "{}", n),
            RecordValue::Text(s) => f.write_str(s),
        }
    }
}

/// A single daily observation for one station and element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    /// "YYYYMMDD"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub element: String,
    #[serde(default)]
    pub value: Option<RecordValue>,
    #[serde(rename = "mFlag", default)]
    pub m_flag: Option<String>,
    #[serde(rename = "qFlag", default)]
    pub q_flag: Option<String>,
    #[serde(rename = "sFlag", default)]
    pub s_flag: Option<String>,
    /// "HHMM"
    #[serde(default)]
    pub obs_time: Option<String>,
}

impl ObservationRecord {
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(RecordValue::as_f64)
    }
}

/// One row of the results table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub element: String,
    pub value: String,
    /// "m/q/s", with "-" for each missing flag
    pub flags: String,
    pub obs_time: String,
}

fn or_dash(s: Option<&str>) -> &str {
    match s {
        Some(s) if !s.is_empty() => s,
        _ => "-",
    }
}

impl From<&ObservationRecord> for TableRow {
    fn from(record: &ObservationRecord) -> Self {
        let value = match &record.value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => "-".to_string(),
        };
        TableRow {
            date: format_date_for_display(&record.date),
            element: or_dash(Some(record.element.as_str())).to_string(),
            value,
            flags: format!(
                "{}/{}/{}",
                or_dash(record.m_flag.as_deref()),
                or_dash(record.q_flag.as_deref()),
                or_dash(record.s_flag.as_deref()),
            ),
            obs_time: format_obs_time(record.obs_time.as_deref()),
        }
    }
}

/// Body of `GET /api/station/{stationId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
    #[serde(default)]
    pub station_id: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub data: Vec<ObservationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl StationResponse {
    pub fn has_records(&self) -> bool {
        self.count > 0 && !self.data.is_empty()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.data.iter().map(TableRow::from).collect()
    }
}
