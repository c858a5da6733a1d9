//! Results panel: chart on top, one table row per record below.

use crate::chart::CHART_CANVAS_ID;
use crate::components::ChartContainer;
use dioxus::prelude::*;
use ghcn_client::search::StationResults;

#[derive(Props, Clone, PartialEq)]
pub struct ResultsTableProps {
    pub results: StationResults,
}

#[component]
pub fn ResultsTable(props: ResultsTableProps) -> Element {
    let cell = "padding: 6px 10px; border-bottom: 1px solid #eee; text-align: left;";

    rsx! {
        div {
            id: "results-content",
            h3 {
                style: "margin: 16px 0 8px 0;",
                "Results for station "
                span { id: "result-station-id", "{props.results.station_id}" }
            }

            ChartContainer {
                id: CHART_CANVAS_ID.to_string(),
                min_height: 400,
            }

            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "{cell}", "Date" }
                        th { style: "{cell}", "Element" }
                        th { style: "{cell}", "Value" }
                        th { style: "{cell}", "Flags (M/Q/S)" }
                        th { style: "{cell}", "Obs Time" }
                    }
                }
                tbody {
                    id: "results-body",
                    for row in props.results.rows.iter() {
                        tr {
                            td { style: "{cell}", "{row.date}" }
                            td { style: "{cell}", "{row.element}" }
                            td { style: "{cell}", "{row.value}" }
                            td { style: "{cell}", "{row.flags}" }
                            td { style: "{cell}", "{row.obs_time}" }
                        }
                    }
                }
            }
        }
    }
}
