//! Frame delivery for the playback clock.
//!
//! The clock itself is synchronous; something has to call it once per
//! rendering frame. [`FrameScheduler`] abstracts that source so the same
//! loop runs against a tokio interval in production and a scripted list of
//! instants in tests.

use super::clock::{FrameTarget, RunHandle, TickOutcome};
use crate::config::ReplayConfig;
use std::cell::RefCell;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, trace};

/// Source of frame timestamps.
pub trait FrameScheduler {
    /// Current wall-clock instant on this scheduler's timeline.
    fn now(&self) -> Instant;

    /// Wait for the next frame. `None` means no more frames will come.
    fn next_frame(&mut self) -> impl Future<Output = Option<Instant>>;
}

/// Fixed-rate frames backed by [`tokio::time::interval`].
///
/// Late frames are skipped rather than bunched, matching how a display only
/// ever renders the newest state. Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    /// Periods shorter than one millisecond are raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn from_config(config: &ReplayConfig) -> Self {
        Self::new(config.frame_interval())
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl FrameScheduler for IntervalScheduler {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    async fn next_frame(&mut self) -> Option<Instant> {
        Some(self.interval.tick().await.into_std())
    }
}

/// Feed frames from `frames` into `target` until the run stops.
///
/// Returns the outcome that ended the loop: [`TickOutcome::Finished`] when
/// the trace played out, [`TickOutcome::Cancelled`] when a newer run took
/// over, or [`TickOutcome::Stopped`] when the target was idle or the
/// scheduler ran dry. The target is only borrowed for the duration of a
/// single frame, so other code may load a new trace between frames.
pub async fn drive<T, S>(target: &RefCell<T>, run: RunHandle, frames: &mut S) -> TickOutcome
where
    T: FrameTarget,
    S: FrameScheduler,
{
    debug!(generation = run.generation(), "frame loop started");
    let outcome = loop {
        if run.is_cancelled() {
            break TickOutcome::Cancelled;
        }
        let Some(now) = frames.next_frame().await else {
            break TickOutcome::Stopped;
        };
        let outcome = target.borrow_mut().on_frame(&run, now);
        trace!(generation = run.generation(), ?outcome, "frame");
        if !outcome.wants_more_frames() {
            break outcome;
        }
    };
    debug!(generation = run.generation(), ?outcome, "frame loop ended");
    outcome
}
