//! Replay of discrete lift traces as continuous animation.
//!
//! Model:
//! - A raw trace is a bag of [`TraceFrame`]s in any order.
//! - [`CanonicalTrace`] sorts a copy by time (stable) and records the
//!   duration as the last frame's time.
//! - Position is sampled with linear interpolation between neighbouring
//!   frames and clamped at both ends; state, door flag and direction are
//!   step-held from the last frame at or before the query time.
//! - [`PlaybackClock`] advances simulation time at wall-clock rate from 0
//!   to the duration. Every new trace cancels the run in flight.
//! - [`scheduler::drive`] binds a clock to a [`FrameScheduler`].

mod clock;
mod frame;
pub mod sampler;
pub mod scheduler;
mod session;
mod trace;

pub use clock::{
    CancelToken, ClockPhase, FrameTarget, PlaybackClock, PlaybackState, RunHandle, SubscriberId,
    TickOutcome,
};
pub use frame::{Direction, TraceFrame};
pub use sampler::{sample_discrete, sample_position};
pub use scheduler::{FrameScheduler, IntervalScheduler};
pub use session::ReplaySession;
pub use trace::CanonicalTrace;
