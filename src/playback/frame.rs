//! Observation frames of a simulation trace.

use crate::catalog::LiftState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Travel direction reported by a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discretely-timed observation: `{time, floor, state_id, doors_open,
/// direction}` on the wire. Treated as immutable value data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Simulation seconds.
    pub time: f64,
    /// Floor number; fractional values are valid mid-travel.
    #[serde(rename = "floor")]
    pub position: f64,
    pub state_id: String,
    #[serde(default)]
    pub doors_open: bool,
    #[serde(default)]
    pub direction: Direction,
}

impl TraceFrame {
    pub fn new(time: f64, position: f64, state_id: impl Into<String>) -> Self {
        Self {
            time,
            position,
            state_id: state_id.into(),
            doors_open: false,
            direction: Direction::None,
        }
    }

    pub fn with_doors_open(mut self, doors_open: bool) -> Self {
        self.doors_open = doors_open;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Catalog state of this frame, if the identifier is known.
    pub fn state(&self) -> Option<LiftState> {
        LiftState::from_id(&self.state_id)
    }

    /// Parse a JSON array of frames.
    pub fn list_from_json(text: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_frames() {
        let frames = TraceFrame::list_from_json(
            r#"[
                {"time": 0, "floor": 1, "state_id": "IDLE_CLOSED", "doors_open": false, "direction": "none"},
                {"time": 4, "floor": 3, "state_id": "DOOR_OPENING", "doors_open": true, "direction": "up"}
            ]"#,
        )
        .unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].position, 3.0);
        assert_eq!(frames[1].direction, Direction::Up);
        assert_eq!(frames[1].state(), Some(LiftState::DoorOpening));
    }

    #[test]
    fn optional_fields_default() {
        let frames =
            TraceFrame::list_from_json(r#"[{"time": 1.5, "floor": 2, "state_id": "X"}]"#).unwrap();
        assert!(!frames[0].doors_open);
        assert_eq!(frames[0].direction, Direction::None);
        assert_eq!(frames[0].state(), None);
    }

    #[test]
    fn serializes_position_as_floor() {
        let value = serde_json::to_value(TraceFrame::new(2.0, 4.0, "MOVING_UP")).unwrap();
        assert_eq!(value["floor"], 4.0);
        assert_eq!(value["direction"], "none");
    }
}
