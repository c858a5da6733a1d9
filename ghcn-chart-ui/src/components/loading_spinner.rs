//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while a station search is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            id: "loading-indicator",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading weather data..."
        }
    }
}
