//! Polling lifecycle: ask the stats endpoint at a fixed interval until it has data.

use std::future::Future;

use api::FetchError;

use super::profile::ProfileData;
use super::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Running,
    Stopped,
}

/// What the caller should do after one poll.
#[derive(Debug)]
pub enum PollStep {
    /// Server has nothing yet (or the timer is no longer running).
    Pending,
    /// The request failed; the timer keeps running.
    Failed(FetchError),
    /// First non-empty stats object. The timer is already stopped.
    Ready(ProfileData),
}

/// Recurring poll owned by the view. Stops exactly once, on the first
/// non-empty stats object.
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval_ms: u64,
    state: TimerState,
    ticks: u64,
}

impl PollTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            state: TimerState::Idle,
            ticks: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Number of poll results observed while running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `false` if the timer already ran.
    pub fn start(&mut self) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        self.state = TimerState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.state == TimerState::Stopped
    }

    pub fn observe(&mut self, result: Result<ProfileData, FetchError>) -> PollStep {
        if !self.is_running() {
            return PollStep::Pending;
        }
        self.ticks += 1;
        match result {
            Ok(data) if data.is_ready() => {
                self.stop();
                PollStep::Ready(data)
            }
            Ok(_) => PollStep::Pending,
            Err(err) => PollStep::Failed(err),
        }
    }
}

impl Default for PollTimer {
    fn default() -> Self {
        Self::new(super::config::POLL_INTERVAL_MS)
    }
}

/// Sleeps one interval, fetches, and repeats until the server has stats.
///
/// Returns `None` only when `timer` was already started or stopped.
/// Fetch errors are handed to `on_error` and polling continues.
pub async fn poll_until_ready<F, Fut>(
    timer: &mut PollTimer,
    mut fetch: F,
    mut on_error: impl FnMut(&FetchError),
) -> Option<ProfileData>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ProfileData, FetchError>>,
{
    if !timer.start() {
        return None;
    }

    while timer.is_running() {
        timing::sleep_ms(timer.interval_ms()).await;
        match timer.observe(fetch().await) {
            PollStep::Ready(data) => {
                tracing::info!(ticks = timer.ticks(), "profile stats ready");
                return Some(data);
            }
            PollStep::Failed(err) => {
                tracing::warn!(ticks = timer.ticks(), "poll failed: {err}");
                on_error(&err);
            }
            PollStep::Pending => {}
        }
    }
    None
}
