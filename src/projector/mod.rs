//! Presentation mapping for a sampled trace.
//!
//! Pure functions from a held [`TraceFrame`] plus a sampled position to the
//! fields a lift view draws:
//! - state label from the catalog (unknown ids pass through verbatim)
//! - door openness, where door-transition states override the frame flag
//! - direction label with a neutral placeholder
//! - the cabin's pixel offset inside a top-down shaft

use crate::catalog::{label_for, LiftState};
use crate::config::ReplayConfig;
use crate::playback::{sample_discrete, sample_position, CanonicalTrace, Direction, TraceFrame};
use serde::Serialize;

/// Label shown when there is no frame to hold.
pub const NO_STATE_LABEL: &str = "-";

/// Direction label for a stationary cabin.
pub const NEUTRAL_DIRECTION: &str = "—";

/// Everything a lift view needs for one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub state_label: String,
    pub doors_open: bool,
    pub direction_label: String,
    /// Floor reported by the held frame, `None` without one.
    pub display_floor: Option<f64>,
    /// Interpolated floor.
    pub position: f64,
    pub progress_percent: f64,
}

/// Door openness for a held frame.
///
/// `DOOR_OPEN` and `DOOR_OPENING` always draw open, `DOOR_CLOSING` always
/// draws closed; every other state uses the frame's own flag.
pub fn doors_open(frame: &TraceFrame) -> bool {
    match frame.state() {
        Some(state) if state.forces_doors_open() => true,
        Some(state) if state.forces_doors_closed() => false,
        _ => frame.doors_open,
    }
}

pub fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::None => NEUTRAL_DIRECTION,
        other => other.as_str(),
    }
}

pub fn state_label(frame: &TraceFrame) -> &str {
    label_for(&frame.state_id)
}

/// Project a held frame. `frame` is `None` only for an empty trace.
pub fn project(frame: Option<&TraceFrame>, position: f64, progress_percent: f64) -> Projection {
    match frame {
        Some(frame) => Projection {
            state_label: state_label(frame).to_string(),
            doors_open: doors_open(frame),
            direction_label: direction_label(frame.direction).to_string(),
            display_floor: Some(frame.position),
            position,
            progress_percent,
        },
        None => Projection {
            state_label: NO_STATE_LABEL.to_string(),
            doors_open: false,
            direction_label: NEUTRAL_DIRECTION.to_string(),
            display_floor: None,
            position,
            progress_percent,
        },
    }
}

/// Sample `trace` at simulation time `t` and project the result.
pub fn project_at(trace: &CanonicalTrace, t: f64) -> Projection {
    project(
        sample_discrete(trace, t),
        sample_position(trace, t),
        trace.progress(t),
    )
}

/// Top offset of the cabin inside a shaft drawn with the top floor first.
///
/// Positions outside `1..=floors` pin the cabin to the nearest end floor.
pub fn cabin_offset_px(position: f64, config: &ReplayConfig) -> f64 {
    let top = f64::from(config.floors.max(1) - 1);
    let index = (position - 1.0).clamp(0.0, top);
    (top - index) * config.floor_height_px
        + (config.floor_height_px - config.cabin_height_px) / 2.0
}

/// Whether a frame's state id names a moving cabin.
pub fn is_travelling(frame: &TraceFrame) -> bool {
    frame.state().is_some_and(LiftState::is_moving)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(state: &str, doors_open: bool) -> TraceFrame {
        TraceFrame::new(0.0, 2.0, state).with_doors_open(doors_open)
    }

    #[test]
    fn door_states_override_the_flag() {
        assert!(doors_open(&frame("DOOR_OPEN", false)));
        assert!(doors_open(&frame("DOOR_OPENING", false)));
        assert!(!doors_open(&frame("DOOR_CLOSING", true)));
    }

    #[test]
    fn other_states_defer_to_the_flag() {
        assert!(doors_open(&frame("IDLE_CLOSED", true)));
        assert!(!doors_open(&frame("MOVING_UP", false)));
        assert!(doors_open(&frame("SERVICE_MODE", true)));
    }

    #[test]
    fn direction_none_is_neutral() {
        assert_eq!(direction_label(Direction::None), "—");
        assert_eq!(direction_label(Direction::Up), "up");
        assert_eq!(direction_label(Direction::Down), "down");
    }

    #[test]
    fn unknown_state_passes_through() {
        assert_eq!(state_label(&frame("SERVICE_MODE", false)), "SERVICE_MODE");
        assert_eq!(
            state_label(&frame("IDLE_CLOSED", false)),
            LiftState::IdleClosed.label()
        );
    }

    #[test]
    fn empty_trace_projects_placeholders() {
        let p = project_at(&CanonicalTrace::empty(), 3.0);
        assert_eq!(p.state_label, NO_STATE_LABEL);
        assert!(!p.doors_open);
        assert_eq!(p.direction_label, NEUTRAL_DIRECTION);
        assert_eq!(p.display_floor, None);
        assert_eq!(p.position, 0.0);
        assert_eq!(p.progress_percent, 0.0);
    }

    #[test]
    fn projection_holds_discrete_fields_and_interpolates_position() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(2.0, 1.0, "MOVING_UP").with_direction(Direction::Up),
            TraceFrame::new(6.0, 3.0, "DOOR_OPENING").with_doors_open(true),
        ]);
        let p = project_at(&trace, 4.0);
        assert_eq!(p.state_label, LiftState::MovingUp.label());
        assert_eq!(p.direction_label, "up");
        assert_eq!(p.display_floor, Some(1.0));
        assert_eq!(p.position, 2.0);
        assert!(!p.doors_open);
        assert!((p.progress_percent - 66.666).abs() < 0.01);
    }

    #[test]
    fn cabin_offset_tracks_floors_top_down() {
        let config = ReplayConfig::default();
        assert_eq!(cabin_offset_px(5.0, &config), 10.0);
        assert_eq!(cabin_offset_px(1.0, &config), 370.0);
        assert_eq!(cabin_offset_px(1.5, &config), 325.0);
        assert_eq!(cabin_offset_px(-4.0, &config), 370.0);
        assert_eq!(cabin_offset_px(12.0, &config), 10.0);
    }

    #[test]
    fn travelling_only_for_moving_states() {
        assert!(is_travelling(&frame("MOVING_DOWN", false)));
        assert!(!is_travelling(&frame("DOOR_OPEN", false)));
        assert!(!is_travelling(&frame("bogus", false)));
    }
}
