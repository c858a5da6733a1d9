//! RSX components for the station search page.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod no_results;
mod results_table;
mod search_panel;
mod status_overlay;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_results::NoResults;
pub use results_table::ResultsTable;
pub use search_panel::SearchPanel;
pub use status_overlay::StatusOverlay;
