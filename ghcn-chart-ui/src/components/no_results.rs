use dioxus::prelude::*;

/// Empty state for a search that matched no records.
#[component]
pub fn NoResults() -> Element {
    rsx! {
        div {
            id: "no-results",
            style: "padding: 24px; margin: 8px 0; text-align: center; color: #666; background: #F5F5F5; border-radius: 4px;",
            p {
                style: "margin: 0;",
                "No weather data found for this station with the selected filters."
            }
        }
    }
}
