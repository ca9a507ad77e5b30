//! Cancellable real-time playback clock.
//!
//! ```text
//! Idle --load(animatable trace)--> Running --elapsed >= duration--> Finished
//!   ^                                 |                                |
//!   +-------- load(any trace) / cancel() -----------------------------+
//! ```
//!
//! Each `load` starts a new run and cancels the previous one. A run is
//! identified by its [`RunHandle`]; ticks carrying a stale handle are
//! rejected before any state is touched.

use super::trace::CanonicalTrace;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info};

/// Shared cancellation flag for one run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Ticket for one playback run, handed to whatever delivers frames.
#[derive(Clone, Debug)]
pub struct RunHandle {
    generation: u64,
    token: CancelToken,
}

impl RunHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockPhase {
    Idle,
    Running,
    Finished,
}

/// Snapshot passed to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlaybackState {
    /// Simulation seconds in `[0, duration]`.
    pub current_time: f64,
    pub running: bool,
    pub phase: ClockPhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time advanced; keep delivering frames.
    Continue,
    /// Reached the end of the trace on this tick.
    Finished,
    /// Nothing to advance (idle or already finished).
    Stopped,
    /// The handle belongs to a cancelled run; no state was touched.
    Cancelled,
}

impl TickOutcome {
    pub fn wants_more_frames(self) -> bool {
        self == Self::Continue
    }
}

/// Something that advances once per rendering frame.
pub trait FrameTarget {
    fn on_frame(&mut self, run: &RunHandle, now: Instant) -> TickOutcome;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&PlaybackState)>;

/// Drives simulation time from 0 to a trace's duration at wall-clock rate.
///
/// Single-threaded by construction: the clock, its tokens and its
/// subscribers are `!Send`.
///
/// # Example
///
/// ```rust
/// use liftstate::playback::{CanonicalTrace, ClockPhase, PlaybackClock, TraceFrame};
/// use std::time::{Duration, Instant};
///
/// let trace = CanonicalTrace::from_frames(&[
///     TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
///     TraceFrame::new(2.0, 2.0, "MOVING_UP"),
/// ]);
/// let start = Instant::now();
/// let mut clock = PlaybackClock::new();
/// let run = clock.load(&trace, start);
///
/// clock.tick(&run, start + Duration::from_millis(500));
/// assert_eq!(clock.current_time(), 0.5);
///
/// clock.tick(&run, start + Duration::from_secs(3));
/// assert_eq!(clock.current_time(), 2.0);
/// assert_eq!(clock.phase(), ClockPhase::Finished);
/// ```
pub struct PlaybackClock {
    phase: ClockPhase,
    current_time: f64,
    duration: f64,
    started_at: Option<Instant>,
    generation: u64,
    token: CancelToken,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self {
            phase: ClockPhase::Idle,
            current_time: 0.0,
            duration: 0.0,
            started_at: None,
            generation: 0,
            token: CancelToken::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_time: self.current_time,
            running: self.is_running(),
            phase: self.phase,
        }
    }

    /// Register a callback invoked after every state change.
    ///
    /// Callbacks run while the clock is mutably borrowed and must not reach
    /// back into it.
    pub fn subscribe(&mut self, callback: impl FnMut(&PlaybackState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Cancel any run in flight, reset to idle at time 0, then start a new
    /// run at `now` unless the trace is empty or has no positive duration.
    ///
    /// The returned handle is already finished for traces that cannot
    /// animate; ticking it reports [`TickOutcome::Stopped`].
    pub fn load(&mut self, trace: &CanonicalTrace, now: Instant) -> RunHandle {
        let run = self.begin_run();
        self.phase = ClockPhase::Idle;
        self.current_time = 0.0;
        self.duration = trace.duration();
        self.started_at = None;

        if trace.is_animatable() {
            self.phase = ClockPhase::Running;
            self.started_at = Some(now);
            info!(
                generation = run.generation,
                frames = trace.len(),
                duration = self.duration,
                "playback started"
            );
        } else {
            debug!(
                generation = run.generation,
                frames = trace.len(),
                "trace is static; staying idle"
            );
        }
        self.notify();
        run
    }

    /// Advance the run identified by `run` to wall-clock instant `now`.
    pub fn tick(&mut self, run: &RunHandle, now: Instant) -> TickOutcome {
        if run.is_cancelled() || run.generation != self.generation {
            return TickOutcome::Cancelled;
        }
        if self.phase != ClockPhase::Running {
            return TickOutcome::Stopped;
        }
        let Some(started_at) = self.started_at else {
            return TickOutcome::Stopped;
        };

        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        if elapsed >= self.duration {
            self.current_time = self.duration;
            self.phase = ClockPhase::Finished;
            info!(generation = run.generation, duration = self.duration, "playback finished");
            self.notify();
            return TickOutcome::Finished;
        }

        // A frame stamped earlier than the previous one must not rewind time.
        self.current_time = elapsed.max(self.current_time);
        self.notify();
        TickOutcome::Continue
    }

    /// Tear down the current run: no later tick of it changes anything.
    /// The clock returns to idle at time 0 without notifying subscribers.
    pub fn cancel(&mut self) {
        let run = self.begin_run();
        self.phase = ClockPhase::Idle;
        self.current_time = 0.0;
        self.started_at = None;
        debug!(generation = run.generation, "playback cancelled");
    }

    /// Cancel the previous run's token and mint a fresh handle.
    fn begin_run(&mut self) -> RunHandle {
        self.token.cancel();
        self.token = CancelToken::new();
        self.generation += 1;
        RunHandle {
            generation: self.generation,
            token: self.token.clone(),
        }
    }

    fn notify(&mut self) {
        let state = self.state();
        for (_, callback) in &mut self.subscribers {
            callback(&state);
        }
    }
}

impl FrameTarget for PlaybackClock {
    fn on_frame(&mut self, run: &RunHandle, now: Instant) -> TickOutcome {
        self.tick(run, now)
    }
}

impl Drop for PlaybackClock {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl std::fmt::Debug for PlaybackClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackClock")
            .field("phase", &self.phase)
            .field("current_time", &self.current_time)
            .field("duration", &self.duration)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
