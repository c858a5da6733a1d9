//! Search form values and the station query built from them.

use crate::error::QueryError;
use ghcn_utils::dates::date_input_to_compact;

pub const STATION_PATH: &str = "/api/station";

/// Raw values of the search form fields, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub station_id: String,
    pub element_type: String,
    /// "YYYY-MM-DD" from the date picker, or empty
    pub start_date: String,
    pub end_date: String,
}

/// A validated station lookup. Dates are "YYYYMMDD".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationQuery {
    pub station_id: String,
    pub element_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl StationQuery {
    pub fn from_form(form: &SearchForm) -> Result<Self, QueryError> {
        let station_id = non_blank(&form.station_id).ok_or(QueryError::MissingStationId)?;
        Ok(Self {
            station_id: station_id.to_string(),
            element_type: non_blank(&form.element_type).map(str::to_string),
            start_date: non_blank(&form.start_date).map(date_input_to_compact),
            end_date: non_blank(&form.end_date).map(date_input_to_compact),
        })
    }

    /// "?elementType=..&startDate=..&endDate=..", only for supplied fields.
    /// Empty when nothing optional was supplied.
    pub fn query_string(&self) -> String {
        let params = [
            ("elementType", &self.element_type),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
        .collect::<Vec<_>>();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}{}", STATION_PATH, self.station_id, self.query_string())
    }
}
