//! Validation findings.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which end of a transition a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks submission.
    Error,
    /// Advisory only.
    Warning,
}

/// One problem found in a graph. `Display` is the text shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    #[error("FSM must contain at least one state.")]
    NoStates,

    #[error("Every state must have a non-empty ID.")]
    EmptyStateId,

    #[error("State ID \"{id}\" is used more than once.")]
    DuplicateStateId { id: String },

    #[error("FSM must have an initial state.")]
    NoInitialState,

    #[error("FSM must have only one initial state (found {count}).")]
    MultipleInitialStates { count: usize },

    #[error("Every transition must have a non-empty ID.")]
    EmptyTransitionId,

    #[error("Transition ID \"{id}\" is used more than once.")]
    DuplicateTransitionId { id: String },

    #[error("Transition \"{transition}\" refers to a missing {side} state \"{state}\".")]
    DanglingReference {
        transition: String,
        side: Endpoint,
        state: String,
    },

    #[error("Forbidden transition {from} → {to}.")]
    ForbiddenTransition {
        transition: String,
        from: String,
        to: String,
    },

    #[error("State \"{state}\" does not allow outgoing transitions.")]
    NoOutgoingTransitions { transition: String, state: String },

    #[error("Unreachable states from initial: {}.", .states.join(", "))]
    UnreachableStates { states: Vec<String> },

    #[error("State \"{id}\" is not a known lift state.")]
    UnknownState { id: String },

    #[error("Transition \"{transition}\" uses unsupported condition \"{condition}\".")]
    UnsupportedCondition {
        transition: String,
        condition: String,
    },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnreachableStates { .. }
            | Self::UnknownState { .. }
            | Self::UnsupportedCondition { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity() == Severity::Error
    }
}
