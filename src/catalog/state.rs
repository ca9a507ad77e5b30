//! The closed enumeration of lift states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Discrete operating mode of the simulated lift.
///
/// Identifiers are the upper-case names used by documents and traces
/// (`IDLE_CLOSED`, `DOOR_OPENING`, ...).
///
/// # Example
///
/// ```rust
/// use liftstate::catalog::LiftState;
///
/// let state: LiftState = "MOVING_UP".parse().unwrap();
/// assert_eq!(state, LiftState::MovingUp);
/// assert_eq!(state.id(), "MOVING_UP");
/// assert!(!state.forces_doors_open());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiftState {
    IdleClosed,
    DoorOpening,
    DoorOpen,
    DoorClosing,
    MovingUp,
    MovingDown,
}

/// Returned when an identifier is not part of the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lift state '{0}'")]
pub struct UnknownState(pub String);

impl LiftState {
    /// Every catalog state, in display order.
    pub const ALL: [LiftState; 6] = [
        LiftState::IdleClosed,
        LiftState::DoorOpening,
        LiftState::DoorOpen,
        LiftState::DoorClosing,
        LiftState::MovingUp,
        LiftState::MovingDown,
    ];

    /// Wire identifier of the state.
    pub fn id(self) -> &'static str {
        match self {
            Self::IdleClosed => "IDLE_CLOSED",
            Self::DoorOpening => "DOOR_OPENING",
            Self::DoorOpen => "DOOR_OPEN",
            Self::DoorClosing => "DOOR_CLOSING",
            Self::MovingUp => "MOVING_UP",
            Self::MovingDown => "MOVING_DOWN",
        }
    }

    /// Human-readable label, suffixed with the identifier.
    pub fn label(self) -> &'static str {
        match self {
            Self::IdleClosed => "Idle, doors closed (IDLE_CLOSED)",
            Self::DoorOpening => "Doors opening (DOOR_OPENING)",
            Self::DoorOpen => "Doors open (DOOR_OPEN)",
            Self::DoorClosing => "Doors closing (DOOR_CLOSING)",
            Self::MovingUp => "Moving up (MOVING_UP)",
            Self::MovingDown => "Moving down (MOVING_DOWN)",
        }
    }

    /// Look up a state by its identifier. Surrounding whitespace is ignored.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Door-transition states that show the doors open regardless of the
    /// frame's own flag.
    pub fn forces_doors_open(self) -> bool {
        matches!(self, Self::DoorOpen | Self::DoorOpening)
    }

    /// Door-transition state that shows the doors closed regardless of the
    /// frame's own flag.
    pub fn forces_doors_closed(self) -> bool {
        matches!(self, Self::DoorClosing)
    }

    pub fn is_moving(self) -> bool {
        matches!(self, Self::MovingUp | Self::MovingDown)
    }
}

impl fmt::Display for LiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LiftState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownState(s.to_string()))
    }
}
