//! Blocking overlay shown while the backend is still ingesting data.

use crate::state::AppState;
use dioxus::prelude::*;
use ghcn_client::status::OVERLAY_MESSAGE;

/// Renders the readiness overlay while the status tracker shows it.
#[component]
pub fn StatusOverlay() -> Element {
    let state = use_context::<AppState>();
    let Some(view) = state.status.read().overlay().cloned() else {
        return rsx! {};
    };

    let bar_style = format!(
        "width: {}; height: 100%; background: #1976D2; transition: width 0.3s;",
        view.bar_width()
    );
    let text_color = if view.is_error { "#d32f2f" } else { "#333" };
    let detail_class = if view.is_error { "error" } else { "" };

    rsx! {
        div {
            class: "system-status-overlay",
            style: "display: flex; position: fixed; inset: 0; z-index: 1000; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.6);",
            div {
                class: "system-status-content",
                style: "background: #fff; padding: 24px 32px; border-radius: 8px; max-width: 520px; width: 90%;",
                h2 { style: "margin-top: 0;", "{view.title}" }
                p { "{OVERLAY_MESSAGE}" }
                div {
                    class: "progress-container",
                    style: "position: relative; height: 22px; background: #E0E0E0; border-radius: 4px; overflow: hidden;",
                    div {
                        class: "progress-bar",
                        id: "system-progress-bar",
                        style: "{bar_style}",
                    }
                }
                div {
                    class: "progress-text",
                    id: "system-progress-text",
                    style: "margin-top: 8px; color: {text_color};",
                    "{view.progress_text}"
                }
                div {
                    class: "status-details",
                    id: "system-status-details",
                    style: "font-size: 13px; color: #555;",
                    for line in view.details.iter() {
                        p { class: "{detail_class}", "{line}" }
                    }
                }
            }
        }
    }
}
