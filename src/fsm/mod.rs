//! Authoring model for lift FSM descriptions.
//!
//! - [`FsmGraph`]: ordered states and transitions with pure, total edit
//!   operations that each return the updated graph
//! - [`StatePatch`] / [`TransitionPatch`]: typed partial updates
//! - [`FsmDocument`]: the wire shape, plus tolerant normalization from any
//!   JSON value
//! - [`FsmEditor`]: one editing session that re-validates after every edit
//!
//! The graph enforces exactly one invariant on write (a single initial
//! state). Everything else is reported by [`crate::validation`].

pub mod condition;
mod document;
pub mod editor;
mod graph;
mod patch;

pub use condition::Condition;
pub use document::{FsmDocument, StateNode, TransitionEdge, DEFAULT_FSM_KIND};
pub use editor::{Edit, FsmEditor};
pub use graph::FsmGraph;
pub use patch::{StatePatch, TransitionPatch};
