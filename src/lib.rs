//! Liftstate: elevator FSM authoring and trace replay
//!
//! Two independent halves share one catalog of lift operating modes:
//! the authoring side builds and checks controller FSMs, the replay side
//! turns simulation traces into continuous animation.
//!
//! # Core Concepts
//!
//! - **Catalog**: the six discrete lift states and the fixed table of legal
//!   successors
//! - **Graph**: an immutable FSM document edited through pure operations
//! - **Validation**: every structural and legality finding, accumulated at once
//! - **Playback**: time-sorted traces, interpolated position, step-held state,
//!   and a cancellable clock
//!
//! # Example
//!
//! ```rust
//! use liftstate::fsm::{FsmGraph, StatePatch, TransitionPatch};
//! use liftstate::validation::validate;
//!
//! let graph = FsmGraph::new()
//!     .add_state()
//!     .add_state()
//!     .update_state(0, &StatePatch::new().id("IDLE_CLOSED"))
//!     .update_state(1, &StatePatch::new().id("DOOR_OPEN"))
//!     .add_transition()
//!     .update_transition(0, &TransitionPatch::new().to_state("DOOR_OPEN"));
//!
//! let findings = validate(&graph);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(
//!     findings[0].to_string(),
//!     "Forbidden transition IDLE_CLOSED → DOOR_OPEN."
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod fsm;
pub mod playback;
pub mod projector;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use catalog::LiftState;
pub use config::ReplayConfig;
pub use fsm::{FsmDocument, FsmEditor, FsmGraph};
pub use playback::{CanonicalTrace, PlaybackClock, ReplaySession, TraceFrame};
pub use projector::Projection;
pub use validation::{validate, Finding};
