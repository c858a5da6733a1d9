//! Weather line chart on a canvas, drawn by Chart.js.

use crate::js_bridge;
use ghcn_client::chart::{chart_options, prepare_chart_data, NO_CHART_DATA};
use ghcn_client::observation::ObservationRecord;

/// DOM id of the chart canvas.
pub const CHART_CANVAS_ID: &str = "weather-chart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartAdapter {
    canvas_id: &'static str,
}

impl Default for ChartAdapter {
    fn default() -> Self {
        Self::new(CHART_CANVAS_ID)
    }
}

impl ChartAdapter {
    pub fn new(canvas_id: &'static str) -> Self {
        Self { canvas_id }
    }

    /// Replace whatever the canvas shows with a chart of `records`,
    /// or a placeholder when none of them has a numeric value.
    pub fn render(&self, records: &[ObservationRecord]) {
        self.clear();

        let data = prepare_chart_data(records, js_sys::Math::random);
        if !data.has_points() {
            log::info!("no numeric values among {} records", records.len());
            js_bridge::render_placeholder(self.canvas_id, NO_CHART_DATA);
            return;
        }

        let data_json = match serde_json::to_string(&data) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize chart data: {}", e);
                return;
            }
        };
        let options_json = chart_options().to_string();
        log::info!(
            "rendering {} series over {} dates",
            data.datasets.len(),
            data.labels.len()
        );
        js_bridge::render_line_chart(self.canvas_id, &data_json, &options_json);
    }

    pub fn clear(&self) {
        js_bridge::destroy_chart(self.canvas_id);
    }
}
