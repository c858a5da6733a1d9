//! Browser side of the GHCN station search page.
//!
//! This crate provides:
//! - `fetch`: `WeatherApi` over the browser `fetch` API
//! - `poller`: the status poller owning the single re-check interval
//! - `search`: form submission wired to the search controller
//! - `chart`: the Chart.js line chart adapter
//! - `js_bridge`: Rust wrappers for the Chart.js glue via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the overlay, form and result panels

pub mod chart;
pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod poller;
pub mod search;
pub mod state;
