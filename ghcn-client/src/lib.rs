//! Core types and view state for the GHCN weather station search UI.
//!
//! Nothing in this crate touches the DOM: the browser crate feeds it API
//! results and renders whatever view state comes back out.
//!
//! - `api`: the `WeatherApi` contract and response decoding
//! - `status`: readiness snapshots, overlay view and the polling state machine
//! - `search`: form validation, request tokens and result views
//! - `chart`: observation records shaped into Chart.js line datasets

pub mod api;
pub mod chart;
pub mod config;
pub mod element;
pub mod error;
pub mod observation;
pub mod query;
pub mod search;
pub mod status;

#[cfg(test)]
pub(crate) mod fixtures;
