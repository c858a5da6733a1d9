//! Observation records shaped into Chart.js line datasets.
//!
//! One series per element code, all aligned on a shared date axis. A date
//! where an element has no numeric value is a gap (`null`), never zero.

use crate::element::{Element, Rgb};
use crate::observation::ObservationRecord;
use ghcn_utils::dates::format_date_for_display;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

pub const CHART_TITLE: &str = "Weather Data Visualization";
pub const NO_CHART_DATA: &str = "No chart data available";

const LINE_ALPHA: f64 = 0.7;
const FILL_ALPHA: f64 = 0.1;

/// One Chart.js dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Element code this series was built from
    #[serde(skip)]
    pub element: String,
    pub label: String,
    /// Aligned with `ChartData::labels`; `None` is a gap
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub tension: f64,
    pub fill: bool,
}

impl ChartSeries {
    fn new(element: &str, color: Rgb, data: Vec<Option<f64>>) -> Self {
        let label = Element::from_code(element).map_or(element, |e| e.label());
        ChartSeries {
            element: element.to_string(),
            label: label.to_string(),
            data,
            border_color: color.rgba(LINE_ALPHA),
            background_color: color.rgba(FILL_ALPHA),
            border_width: 2,
            point_radius: 3,
            point_hover_radius: 5,
            tension: 0.1,
            fill: false,
        }
    }

    pub fn point_count(&self) -> usize {
        self.data.iter().flatten().count()
    }
}

/// Chart.js `data` object for a line chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    /// "YYYY-MM-DD", sorted
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    /// Whether any series has at least one numeric point.
    pub fn has_points(&self) -> bool {
        self.datasets.iter().any(|s| s.point_count() > 0)
    }

    #[cfg(test)]
    fn series(&self, element: &str) -> Option<&ChartSeries> {
        self.datasets.iter().find(|s| s.element == element)
    }

    /// Value of `element` at `date`; `None` for gaps and unknown dates.
    #[cfg(test)]
    fn value_at(&self, element: &str, date: &str) -> Option<f64> {
        let index = self.labels.iter().position(|d| d == date)?;
        self.series(element)?.data.get(index).copied().flatten()
    }
}

/// Colour for an element code. Unknown codes get a random one drawn from
/// `random`, which must yield values in `[0, 1)`.
fn series_color(element: &str, random: &mut impl FnMut() -> f64) -> Rgb {
    match Element::from_code(element) {
        Some(known) => known.color(),
        None => {
            let mut channel = || (random() * 255.0).floor().clamp(0.0, 255.0) as u8;
            let (r, g, b) = (channel(), channel(), channel());
            Rgb::new(r, g, b)
        }
    }
}

/// Group records by element and align them on the union of their dates.
///
/// Series appear in the order their element was first seen. Dates are
/// zero-padded so sorting them as strings sorts them chronologically.
pub fn prepare_chart_data(
    records: &[ObservationRecord],
    mut random: impl FnMut() -> f64,
) -> ChartData {
    let mut order: Vec<&str> = Vec::new();
    let mut by_element: HashMap<&str, HashMap<String, f64>> = HashMap::new();
    let mut all_dates: BTreeSet<String> = BTreeSet::new();

    for record in records {
        let date = format_date_for_display(&record.date);
        all_dates.insert(date.clone());

        let points = by_element
            .entry(record.element.as_str())
            .or_insert_with(|| {
                order.push(record.element.as_str());
                HashMap::new()
            });
        if let Some(value) = record.numeric_value() {
            points.insert(date, value);
        }
    }

    let labels: Vec<String> = all_dates.into_iter().collect();
    let datasets = order
        .into_iter()
        .map(|element| {
            let points = &by_element[element];
            let data = labels.iter().map(|d| points.get(d).copied()).collect();
            ChartSeries::new(element, series_color(element, &mut random), data)
        })
        .collect();

    ChartData { labels, datasets }
}

/// Chart.js `options` for the weather line chart.
pub fn chart_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "spanGaps": false,
        "plugins": {
            "title": {
                "display": true,
                "text": CHART_TITLE,
                "font": { "size": 16 }
            },
            "tooltip": { "mode": "index", "intersect": false },
            "legend": { "position": "top" }
        },
        "scales": {
            "x": { "title": { "display": true, "text": "Date" } },
            "y": { "title": { "display": true, "text": "Value" } }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::RecordValue;

    fn record(date: &str, element: &str, value: &str) -> ObservationRecord {
        ObservationRecord {
            date: date.to_string(),
            element: element.to_string(),
            value: Some(RecordValue::Text(value.to_string())),
            ..Default::default()
        }
    }

    fn no_random() -> f64 {
        panic!("known elements must not draw a random colour")
    }

    #[test]
    fn test_non_numeric_value_is_a_gap() {
        let data = prepare_chart_data(
            &[
                record("20230101", "TMAX", "5"),
                record("20230102", "TMAX", "bad"),
            ],
            no_random,
        );
        assert_eq!(data.labels, vec!["2023-01-01", "2023-01-02"]);
        let tmax = data.series("TMAX").unwrap();
        assert_eq!(tmax.data, vec![Some(5.0), None]);
        assert_eq!(data.value_at("TMAX", "2023-01-01"), Some(5.0));
        assert_eq!(data.value_at("TMAX", "2023-01-02"), None);
    }

    #[test]
    fn test_series_share_sorted_date_axis() {
        let data = prepare_chart_data(
            &[
                record("20240103", "PRCP", "0"),
                record("20240101", "TMAX", "56"),
                record("20240102", "TMIN", "-33"),
                record("20240101", "PRCP", "12"),
            ],
            no_random,
        );
        assert_eq!(data.labels, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);

        let elements: Vec<&str> = data.datasets.iter().map(|s| s.element.as_str()).collect();
        assert_eq!(elements, vec!["PRCP", "TMAX", "TMIN"]);

        // Zero is a reading, not a gap.
        assert_eq!(data.series("PRCP").unwrap().data, vec![Some(12.0), None, Some(0.0)]);
        assert_eq!(data.series("TMAX").unwrap().data, vec![Some(56.0), None, None]);
        assert_eq!(data.series("TMIN").unwrap().data, vec![None, Some(-33.0), None]);
    }

    #[test]
    fn test_known_labels_and_colors() {
        let data = prepare_chart_data(&[record("20240101", "SNWD", "100")], no_random);
        let series = &data.datasets[0];
        assert_eq!(series.label, "Snow Depth");
        assert_eq!(series.border_color, "rgba(230, 230, 255, 0.7)");
        assert_eq!(series.background_color, "rgba(230, 230, 255, 0.1)");
    }

    #[test]
    fn test_unknown_element_uses_code_and_random_color() {
        let mut draws = vec![0.0, 0.5, 0.999].into_iter();
        let data = prepare_chart_data(&[record("20240101", "AWND", "31")], move || {
            draws.next().unwrap()
        });
        let series = &data.datasets[0];
        assert_eq!(series.label, "AWND");
        assert_eq!(series.border_color, "rgba(0, 127, 254, 0.7)");
    }

    #[test]
    fn test_element_code_borrowed_from_record() {
        let code = String::from("WT01");
        let records = vec![record("20240101", &code, "1"), record("20240101", "PRCP", "3")];
        let mut draws = std::iter::repeat(0.25);
        let data = prepare_chart_data(&records, move || draws.next().unwrap());
        drop(records);
        assert_eq!(data.datasets[0].label, "WT01");
        assert_eq!(data.datasets[0].border_color, "rgba(63, 63, 63, 0.7)");
        assert_eq!(data.datasets[1].label, "Precipitation");
    }

    #[test]
    fn test_no_numeric_points_means_no_chart() {
        let data = prepare_chart_data(
            &[record("20240101", "TMAX", ""), record("20240102", "PRCP", "x")],
            no_random,
        );
        assert_eq!(data.datasets.len(), 2);
        assert!(!data.has_points());
        assert!(!prepare_chart_data(&[], no_random).has_points());
    }

    #[test]
    fn test_serializes_to_chart_js_shape() {
        let data = prepare_chart_data(
            &[
                record("20230101", "TMAX", "5"),
                record("20230102", "TMAX", "bad"),
            ],
            no_random,
        );
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["labels"][1], "2023-01-02");
        let dataset = &json["datasets"][0];
        assert_eq!(dataset["label"], "Max Temperature");
        assert_eq!(dataset["data"][0], 5.0);
        assert!(dataset["data"][1].is_null());
        assert_eq!(dataset["borderWidth"], 2);
        assert_eq!(dataset["pointHoverRadius"], 5);
        assert!(dataset.get("element").is_none());
    }
}
