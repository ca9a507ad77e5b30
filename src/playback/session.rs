//! One trace bound to one clock.

use super::clock::{FrameTarget, PlaybackClock, PlaybackState, RunHandle, TickOutcome};
use super::frame::TraceFrame;
use super::trace::CanonicalTrace;
use crate::projector::{project_at, Projection};
use std::time::Instant;

/// Replay state owned by a single lift view.
///
/// Loading a trace normalizes it and restarts the clock; the previous run's
/// handle is cancelled, so a frame loop still holding it stops on its next
/// frame without touching the new run.
#[derive(Debug, Default)]
pub struct ReplaySession {
    trace: CanonicalTrace,
    clock: PlaybackClock,
}

impl ReplaySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the trace. `None` and an empty slice both give a static view.
    pub fn load(&mut self, raw: Option<&[TraceFrame]>, now: Instant) -> RunHandle {
        self.trace = CanonicalTrace::normalize(raw);
        self.clock.load(&self.trace, now)
    }

    pub fn tick(&mut self, run: &RunHandle, now: Instant) -> TickOutcome {
        self.clock.tick(run, now)
    }

    /// Stop the current run and return to time 0.
    pub fn cancel(&mut self) {
        self.clock.cancel();
    }

    pub fn trace(&self) -> &CanonicalTrace {
        &self.trace
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut PlaybackClock {
        &mut self.clock
    }

    pub fn state(&self) -> PlaybackState {
        self.clock.state()
    }

    /// Presentation of the trace at the clock's current time.
    pub fn projection(&self) -> Projection {
        project_at(&self.trace, self.clock.current_time())
    }
}

impl FrameTarget for ReplaySession {
    fn on_frame(&mut self, run: &RunHandle, now: Instant) -> TickOutcome {
        self.tick(run, now)
    }
}
