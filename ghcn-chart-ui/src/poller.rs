//! Status polling against `/api/status`.
//!
//! `StatusPoller` is the only owner of the re-check loop. The decision of
//! when to start or stop it comes from `StatusTracker`; this type turns
//! those decisions into a Dioxus task ticking on a `gloo-timers` timeout.

use crate::state::AppState;
use dioxus::prelude::*;
use ghcn_client::api::WeatherApi;
use ghcn_client::status::IntervalCommand;
use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Copy)]
pub struct StatusPoller {
    state: AppState,
}

impl StatusPoller {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Issue one status check and act on the result.
    pub fn check(self) {
        let mut state = self.state;
        spawn(async move {
            let api = state.api.peek().clone();
            let result = api.status().await;
            let command = state.status.write().apply(result);
            match command {
                IntervalCommand::Keep => {}
                IntervalCommand::Start(ms) => self.start(ms),
                IntervalCommand::Stop => self.stop(),
            }
        });
    }

    /// Start re-checking every `ms` milliseconds.
    ///
    /// `StatusTracker` keeps at most one loop alive and only asks for a
    /// start while none runs. The `stop()` here is only a backstop.
    pub fn start(self, ms: u32) {
        self.stop();
        log::info!("polling system status every {}ms", ms);
        let task = spawn(async move {
            loop {
                TimeoutFuture::new(ms).await;
                self.check();
            }
        });
        let mut poll_task = self.state.poll_task;
        poll_task.set(Some(task));
    }

    pub fn stop(self) {
        let mut poll_task = self.state.poll_task;
        let taken = poll_task.write().take();
        if let Some(task) = taken {
            log::info!("status polling stopped");
            task.cancel();
        }
    }
}
