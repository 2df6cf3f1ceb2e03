use crate::api::SummarizerClient;
use crate::errors::ApiError;
use crate::models::SummaryResult;
use crate::quota::RateLimiter;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Loading,
    Result,
    Error,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Loading => "loading",
            Mode::Result => "result",
            Mode::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub summary: Option<SummaryResult>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UiState {
    pub fn mode(&self) -> Mode {
        if self.is_loading {
            Mode::Loading
        } else if self.summary.is_some() {
            Mode::Result
        } else if self.error.is_some() {
            Mode::Error
        } else {
            Mode::Idle
        }
    }

    /// Enters loading with a clean slate. Returns false if a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.error = None;
        self.summary = None;
        self.is_loading = true;
        true
    }

    pub fn finish(&mut self, outcome: Result<SummaryResult, ApiError>) {
        match outcome {
            Ok(summary) => self.summary = Some(summary),
            Err(err) => self.error = Some(err.to_string()),
        }
        self.is_loading = false;
    }

    pub fn new_summary(&mut self) {
        self.summary = None;
        self.error = None;
    }
}

/// Drives one submission at a time through the summarization client and
/// counts successful ones against the daily quota.
pub struct Controller {
    state: Mutex<UiState>,
    client: SummarizerClient,
    limiter: RateLimiter,
}

impl Controller {
    pub fn new(client: SummarizerClient, limiter: RateLimiter) -> Self {
        Self {
            state: Mutex::new(UiState::default()),
            client,
            limiter,
        }
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub async fn snapshot(&self) -> UiState {
        self.state.lock().await.clone()
    }

    pub async fn submit(&self, url: &str) -> Mode {
        if !self.state.lock().await.begin_submit() {
            warn!("ignoring submission while another is in flight");
            return Mode::Loading;
        }

        let outcome = self.client.summarize_thread(url).await;
        if outcome.is_ok() {
            match self.limiter.increment_request_count() {
                Ok(used) => info!("summary ready, {used} requests used today"),
                Err(err) => error!("failed to record request: {err}"),
            }
        }

        let mut state = self.state.lock().await;
        state.finish(outcome);
        state.mode()
    }

    pub async fn new_summary(&self) {
        let mut state = self.state.lock().await;
        if state.is_loading {
            return;
        }
        state.new_summary();
    }
}
