//! Station search form.

use crate::search::submit_search;
use crate::state::AppState;
use dioxus::prelude::*;
use ghcn_client::element::Element as WeatherElement;
use ghcn_utils::dates::format_date_for_input;

/// Station id, element filter and date range. Submitting runs the search;
/// the button stays disabled until the backend reports ready.
#[component]
pub fn SearchPanel() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();
    let submit_enabled = state.status.read().submit_enabled();
    let today = format_date_for_input(&chrono::Local::now().date_naive());

    let element_options: Vec<(&'static str, String)> = WeatherElement::ALL
        .iter()
        .map(|e| (e.code(), format!("{} - {} ({})", e.code(), e.label(), e.unit())))
        .collect();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        submit_search(state);
    };

    let label_style = "display: flex; flex-direction: column; font-weight: bold; font-size: 13px; gap: 4px;";

    rsx! {
        form {
            id: "search-form",
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 16px;",
            onsubmit: on_submit,
            label {
                style: "{label_style}",
                "Station ID"
                input {
                    id: "station-id",
                    r#type: "text",
                    placeholder: "e.g. USW00094728",
                    value: "{form.station_id}",
                    oninput: move |evt: Event<FormData>| state.form.write().station_id = evt.value(),
                }
            }
            label {
                style: "{label_style}",
                "Element"
                select {
                    id: "element-type",
                    onchange: move |evt: Event<FormData>| state.form.write().element_type = evt.value(),
                    option { value: "", selected: form.element_type.is_empty(), "All elements" }
                    for (code, text) in element_options {
                        option {
                            value: "{code}",
                            selected: form.element_type == code,
                            "{text}"
                        }
                    }
                }
            }
            label {
                style: "{label_style}",
                "Start date"
                input {
                    id: "start-date",
                    r#type: "date",
                    max: "{today}",
                    value: "{form.start_date}",
                    onchange: move |evt: Event<FormData>| state.form.write().start_date = evt.value(),
                }
            }
            label {
                style: "{label_style}",
                "End date"
                input {
                    id: "end-date",
                    r#type: "date",
                    max: "{today}",
                    value: "{form.end_date}",
                    onchange: move |evt: Event<FormData>| state.form.write().end_date = evt.value(),
                }
            }
            button {
                r#type: "submit",
                disabled: !submit_enabled,
                style: "padding: 6px 18px;",
                "Search"
            }
        }
    }
}
