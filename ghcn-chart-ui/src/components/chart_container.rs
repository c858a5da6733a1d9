//! Canvas container for the Chart.js line chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the canvas (Chart.js renders into this)
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A sized box holding the chart canvas. Chart.js fills the parent.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%; margin-bottom: 16px;",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            canvas {
                id: "{props.id}",
            }
        }
    }
}
