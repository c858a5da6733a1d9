//! Backend readiness: status snapshots, the overlay shown while data is
//! ingested, and the state machine deciding when to poll.
//!
//! The tracker is a two-state loop. While the backend reports "not ready"
//! (or the status call fails) the overlay is shown and one interval keeps
//! re-checking; the first "ready" hides the overlay and stops the interval.
//! Nothing restarts polling afterwards except an explicit re-check.

use crate::config::ClientConfig;
use crate::error::ApiError;
use ghcn_utils::numbers::{bytes_to_mib, format_percent, with_thousands};
use serde::Deserialize;

pub const INITIAL_TITLE: &str = "System Initializing";
pub const OVERLAY_MESSAGE: &str =
    "The weather data is being downloaded and processed. Please wait...";

/// Flat progress object as it appears on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProgress {
    is_downloading: Option<bool>,
    download_percent: Option<f64>,
    downloaded_bytes: Option<u64>,
    total_bytes: Option<u64>,
    percent_complete: Option<f64>,
    processed_lines: Option<u64>,
    total_lines: Option<u64>,
    processed_stations: Option<u64>,
}

/// Ingestion progress, split by phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireProgress")]
pub enum Progress {
    Downloading {
        percent: Option<f64>,
        downloaded_bytes: Option<u64>,
        total_bytes: Option<u64>,
    },
    Processing {
        percent: Option<f64>,
        processed_lines: Option<u64>,
        total_lines: Option<u64>,
        processed_stations: Option<u64>,
    },
}

impl From<WireProgress> for Progress {
    fn from(wire: WireProgress) -> Self {
        if wire.is_downloading.unwrap_or(false) {
            Progress::Downloading {
                percent: wire.download_percent,
                downloaded_bytes: wire.downloaded_bytes,
                total_bytes: wire.total_bytes,
            }
        } else {
            Progress::Processing {
                percent: wire.percent_complete,
                processed_lines: wire.processed_lines,
                total_lines: wire.total_lines,
                processed_stations: wire.processed_stations,
            }
        }
    }
}

impl Progress {
    pub fn is_downloading(&self) -> bool {
        matches!(self, Progress::Downloading { .. })
    }

    /// Phase percentage, 0 when the backend did not report one.
    pub fn percent(&self) -> f64 {
        let percent = match self {
            Progress::Downloading { percent, .. } | Progress::Processing { percent, .. } => {
                *percent
            }
        };
        percent.filter(|p| p.is_finite()).unwrap_or(0.0)
    }
}

/// Body of `GET /api/status`. Each poll replaces the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<Progress>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// What the readiness overlay currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub title: String,
    /// Progress bar fill, 0 to 100
    pub bar_percent: f64,
    pub progress_text: String,
    pub details: Vec<String>,
    /// Progress text is an error message rather than progress
    pub is_error: bool,
}

impl Default for OverlayView {
    fn default() -> Self {
        Self {
            title: INITIAL_TITLE.to_string(),
            bar_percent: 0.0,
            progress_text: "Preparing data...".to_string(),
            details: Vec::new(),
            is_error: false,
        }
    }
}

impl OverlayView {
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        let mut view = Self::default();
        view.update(snapshot);
        view
    }

    /// CSS width of the progress bar.
    pub fn bar_width(&self) -> String {
        format!("{}%", format_percent(self.bar_percent))
    }

    /// Replace everything shown with the contents of `snapshot`.
    pub fn update(&mut self, snapshot: &StatusSnapshot) {
        let downloading = snapshot
            .progress
            .as_ref()
            .is_some_and(Progress::is_downloading);
        let phase = if downloading { "Downloading" } else { "Processing" };
        self.title = format!("{} - {} Phase", INITIAL_TITLE, phase);

        let percent = snapshot.progress.as_ref().map_or(0.0, Progress::percent);
        self.bar_percent = percent.clamp(0.0, 100.0);
        self.is_error = false;
        self.details.clear();

        match &snapshot.progress {
            Some(Progress::Downloading {
                downloaded_bytes,
                total_bytes,
                ..
            }) => {
                self.progress_text = non_empty(&snapshot.message)
                    .unwrap_or("Downloading data...")
                    .to_string();
                if let (Some(done), Some(total)) = (downloaded_bytes, total_bytes) {
                    self.details.push(format!(
                        "Downloaded: {} MB of {} MB ({}%)",
                        bytes_to_mib(*done),
                        bytes_to_mib(*total),
                        format_percent(percent)
                    ));
                }
            }
            progress => {
                self.progress_text = non_empty(&snapshot.message)
                    .or_else(|| non_empty(&snapshot.status))
                    .unwrap_or("Processing...")
                    .to_string();
                if let Some(Progress::Processing {
                    processed_lines,
                    total_lines,
                    processed_stations,
                    ..
                }) = progress
                {
                    if let (Some(done), Some(total)) = (processed_lines, total_lines) {
                        self.details.push(format!(
                            "Processed {} of {} lines ({}%)",
                            with_thousands(*done),
                            with_thousands(*total),
                            format_percent(percent)
                        ));
                    }
                    if let Some(stations) = processed_stations {
                        self.details
                            .push(format!("Found {} stations", with_thousands(*stations)));
                    }
                }
            }
        }
    }

    /// Show a status-check failure in place of the progress text.
    /// Title and bar keep whatever the last good snapshot set.
    pub fn show_error(&mut self, message: &str) {
        self.progress_text = "Error checking status".to_string();
        self.details = vec![format!("Error: {}", message)];
        self.is_error = true;
    }
}

/// What the owner of the poll interval has to do after a status result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalCommand {
    Keep,
    /// Start re-checking every `n` milliseconds.
    Start(u32),
    Stop,
}

/// Readiness state machine behind the status poller.
///
/// Owns the overlay (built on first need and kept afterwards), whether the
/// submit control is enabled, and the cadence of the one active interval.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTracker {
    ready_poll_ms: u32,
    error_poll_ms: u32,
    overlay: Option<OverlayView>,
    overlay_visible: bool,
    interval_ms: Option<u32>,
    submit_enabled: bool,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl StatusTracker {
    /// The submit control starts disabled until the first "ready".
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            ready_poll_ms: config.ready_poll_ms,
            error_poll_ms: config.error_poll_ms,
            overlay: None,
            overlay_visible: false,
            interval_ms: None,
            submit_enabled: false,
        }
    }

    /// The overlay, if it is currently shown.
    pub fn overlay(&self) -> Option<&OverlayView> {
        self.overlay.as_ref().filter(|_| self.overlay_visible)
    }

    pub fn overlay_built(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Cadence of the active interval, if one is running.
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    fn overlay_mut(&mut self) -> &mut OverlayView {
        self.overlay.get_or_insert_with(|| {
            log::debug!("building readiness overlay");
            OverlayView::default()
        })
    }

    fn start_interval(&mut self, ms: u32) -> IntervalCommand {
        if self.interval_ms.is_some() {
            return IntervalCommand::Keep;
        }
        self.interval_ms = Some(ms);
        IntervalCommand::Start(ms)
    }

    /// Fold one status result into the state.
    pub fn apply(&mut self, result: Result<StatusSnapshot, ApiError>) -> IntervalCommand {
        match result {
            Ok(snapshot) if snapshot.ready => {
                self.overlay_visible = false;
                self.submit_enabled = true;
                match self.interval_ms.take() {
                    Some(ms) => {
                        log::info!("backend ready, stopping {}ms status poll", ms);
                        IntervalCommand::Stop
                    }
                    None => IntervalCommand::Keep,
                }
            }
            Ok(snapshot) => {
                self.overlay_mut().update(&snapshot);
                self.overlay_visible = true;
                self.submit_enabled = false;
                self.start_interval(self.ready_poll_ms)
            }
            Err(e) => {
                log::error!("Error checking system status: {}", e);
                self.overlay_mut().show_error(&e.to_string());
                self.overlay_visible = true;
                self.start_interval(self.error_poll_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{STATUS_DOWNLOADING, STATUS_PROCESSING, STATUS_READY};

    fn snapshot(json: &str) -> StatusSnapshot {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_download_phase_overlay() {
        let view = OverlayView::from_snapshot(&snapshot(
            r#"{"ready":false,"progress":{"isDownloading":true,"downloadPercent":50,"downloadedBytes":524288,"totalBytes":1048576}}"#,
        ));
        assert_eq!(view.bar_width(), "50%");
        assert_eq!(view.title, "System Initializing - Downloading Phase");
        assert_eq!(view.progress_text, "Downloading data...");
        assert!(view.details[0].contains("0.50 MB of 1.00 MB (50%)"));
    }

    #[test]
    fn test_download_details_need_both_byte_counts() {
        let view = OverlayView::from_snapshot(&snapshot(
            r#"{"ready":false,"message":"Downloading","progress":{"isDownloading":true,"downloadedBytes":10}}"#,
        ));
        assert_eq!(view.bar_width(), "0%");
        assert_eq!(view.progress_text, "Downloading");
        assert!(view.details.is_empty());
    }

    #[test]
    fn test_processing_phase_overlay() {
        let view = OverlayView::from_snapshot(&snapshot(STATUS_PROCESSING));
        assert_eq!(view.title, "System Initializing - Processing Phase");
        assert_eq!(view.bar_width(), "21%");
        assert_eq!(view.progress_text, "Processing weather data (21.0%)");
        assert_eq!(
            view.details,
            vec![
                "Processed 1,234,567 of 5,878,000 lines (21%)".to_string(),
                "Found 38,211 stations".to_string(),
            ]
        );
    }

    #[test]
    fn test_processing_text_fallbacks() {
        let view = OverlayView::from_snapshot(&snapshot(
            r#"{"ready":false,"status":"initializing","progress":{"processedStations":7}}"#,
        ));
        assert_eq!(view.progress_text, "initializing");
        assert_eq!(view.details, vec!["Found 7 stations".to_string()]);

        let bare = OverlayView::from_snapshot(&snapshot(r#"{"ready":false}"#));
        assert_eq!(bare.title, "System Initializing - Processing Phase");
        assert_eq!(bare.progress_text, "Processing...");
        assert!(bare.details.is_empty());
    }

    #[test]
    fn test_error_keeps_title_and_bar() {
        let mut view = OverlayView::from_snapshot(&snapshot(STATUS_DOWNLOADING));
        view.show_error("Failed to fetch");
        assert_eq!(view.title, "System Initializing - Downloading Phase");
        assert_eq!(view.bar_width(), "50%");
        assert_eq!(view.progress_text, "Error checking status");
        assert_eq!(view.details, vec!["Error: Failed to fetch".to_string()]);
        assert!(view.is_error);

        view.update(&snapshot(STATUS_PROCESSING));
        assert!(!view.is_error);
    }

    #[test]
    fn test_not_ready_starts_one_interval() {
        let mut tracker = StatusTracker::default();
        assert!(!tracker.submit_enabled());
        assert!(!tracker.overlay_built());

        assert_eq!(
            tracker.apply(Ok(snapshot(STATUS_DOWNLOADING))),
            IntervalCommand::Start(2000)
        );
        assert!(tracker.overlay().is_some());
        assert!(!tracker.submit_enabled());

        // Further polls never double-start.
        assert_eq!(
            tracker.apply(Ok(snapshot(STATUS_PROCESSING))),
            IntervalCommand::Keep
        );
        assert_eq!(tracker.interval_ms(), Some(2000));
    }

    #[test]
    fn test_ready_stops_and_hides() {
        let mut tracker = StatusTracker::default();
        tracker.apply(Ok(snapshot(STATUS_DOWNLOADING)));
        assert_eq!(tracker.apply(Ok(snapshot(STATUS_READY))), IntervalCommand::Stop);
        assert!(tracker.overlay().is_none());
        assert!(tracker.overlay_built());
        assert!(tracker.submit_enabled());
        assert_eq!(tracker.interval_ms(), None);

        // Already stopped.
        assert_eq!(tracker.apply(Ok(snapshot(STATUS_READY))), IntervalCommand::Keep);
    }

    #[test]
    fn test_ready_on_first_check_never_polls() {
        let mut tracker = StatusTracker::default();
        assert_eq!(tracker.apply(Ok(snapshot(STATUS_READY))), IntervalCommand::Keep);
        assert!(!tracker.overlay_built());
        assert!(tracker.submit_enabled());
    }

    #[test]
    fn test_failure_polls_slower() {
        let mut tracker = StatusTracker::default();
        let cmd = tracker.apply(Err(ApiError::Transport("Failed to fetch".to_string())));
        assert_eq!(cmd, IntervalCommand::Start(5000));
        let overlay = tracker.overlay().unwrap();
        assert!(overlay.is_error);
        assert_eq!(overlay.details, vec!["Error: Failed to fetch".to_string()]);

        // An active interval is kept regardless of its cadence.
        assert_eq!(
            tracker.apply(Ok(snapshot(STATUS_PROCESSING))),
            IntervalCommand::Keep
        );
        assert_eq!(tracker.interval_ms(), Some(5000));
    }

    #[test]
    fn test_failure_leaves_submit_state_alone() {
        let mut tracker = StatusTracker::default();
        tracker.apply(Ok(snapshot(STATUS_READY)));
        tracker.apply(Err(ApiError::Http(500)));
        assert!(tracker.submit_enabled());
        assert_eq!(tracker.interval_ms(), Some(5000));
    }

    #[test]
    fn test_recheck_after_ready_can_poll_again() {
        let mut tracker = StatusTracker::default();
        tracker.apply(Ok(snapshot(STATUS_DOWNLOADING)));
        tracker.apply(Ok(snapshot(STATUS_READY)));
        assert_eq!(
            tracker.apply(Ok(snapshot(STATUS_PROCESSING))),
            IntervalCommand::Start(2000)
        );
        assert!(!tracker.submit_enabled());
    }

    #[test]
    fn test_custom_cadence() {
        let mut tracker = StatusTracker::new(&ClientConfig {
            ready_poll_ms: 250,
            error_poll_ms: 1000,
            ..Default::default()
        });
        assert_eq!(
            tracker.apply(Ok(snapshot(STATUS_PROCESSING))),
            IntervalCommand::Start(250)
        );
    }
}
