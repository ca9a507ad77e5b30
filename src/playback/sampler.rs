//! Sampling a canonical trace at arbitrary instants.
//!
//! - Position: linear interpolation between the frames around `t`,
//!   clamped to the first/last frame outside the trace.
//! - Discrete fields (state, doors, direction): hold the last frame at or
//!   before `t`; never interpolated.

use super::frame::TraceFrame;
use super::trace::CanonicalTrace;

/// Interpolated position at `t`. An empty trace samples as 0.
///
/// # Example
///
/// ```rust
/// use liftstate::playback::{sample_position, CanonicalTrace, TraceFrame};
///
/// let trace = CanonicalTrace::from_frames(&[
///     TraceFrame::new(0.0, 0.0, "IDLE_CLOSED"),
///     TraceFrame::new(10.0, 4.0, "MOVING_UP"),
/// ]);
/// assert_eq!(sample_position(&trace, 5.0), 2.0);
/// assert_eq!(sample_position(&trace, 15.0), 4.0);
/// assert_eq!(sample_position(&trace, -1.0), 0.0);
/// ```
pub fn sample_position(trace: &CanonicalTrace, t: f64) -> f64 {
    let frames = trace.frames();
    let (Some(first), Some(last)) = (frames.first(), frames.last()) else {
        return 0.0;
    };
    if t.is_nan() || t <= first.time {
        return first.position;
    }

    let next_idx = first_after(frames, t);
    if next_idx == frames.len() {
        return last.position;
    }
    // t > first.time, so the first frame precedes next_idx.
    let prev = &frames[next_idx - 1];
    let next = &frames[next_idx];

    let span = next.time - prev.time;
    if span <= 0.0 {
        return next.position;
    }
    let alpha = (t - prev.time) / span;
    prev.position + (next.position - prev.position) * alpha
}

/// Frame whose discrete fields apply at `t`: the last frame with
/// `time <= t`, or the first frame when `t` precedes the trace. `None` only
/// for an empty trace.
pub fn sample_discrete(trace: &CanonicalTrace, t: f64) -> Option<&TraceFrame> {
    let frames = trace.frames();
    match first_after(frames, t) {
        0 => frames.first(),
        idx => frames.get(idx - 1),
    }
}

/// Index of the first frame with `time > t` (`len` when there is none).
fn first_after(frames: &[TraceFrame], t: f64) -> usize {
    frames.partition_point(|f| f.time <= t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> CanonicalTrace {
        CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 0.0, "IDLE_CLOSED"),
            TraceFrame::new(10.0, 4.0, "MOVING_UP"),
        ])
    }

    #[test]
    fn position_interpolates_linearly() {
        let trace = ramp();
        assert_eq!(sample_position(&trace, 0.0), 0.0);
        assert_eq!(sample_position(&trace, 5.0), 2.0);
        assert_eq!(sample_position(&trace, 2.5), 1.0);
        assert_eq!(sample_position(&trace, 10.0), 4.0);
    }

    #[test]
    fn position_clamps_outside_trace() {
        let trace = ramp();
        assert_eq!(sample_position(&trace, -1.0), 0.0);
        assert_eq!(sample_position(&trace, 15.0), 4.0);
        assert_eq!(sample_position(&trace, f64::NAN), 0.0);
    }

    #[test]
    fn empty_trace_samples_zero_and_none() {
        let trace = CanonicalTrace::empty();
        assert_eq!(sample_position(&trace, 3.0), 0.0);
        assert!(sample_discrete(&trace, 3.0).is_none());
    }

    #[test]
    fn single_frame_is_constant() {
        let trace = CanonicalTrace::from_frames(&[TraceFrame::new(2.0, 3.0, "DOOR_OPEN")]);
        for t in [0.0, 2.0, 7.0] {
            assert_eq!(sample_position(&trace, t), 3.0);
            assert_eq!(sample_discrete(&trace, t).unwrap().state_id, "DOOR_OPEN");
        }
    }

    #[test]
    fn multi_segment_uses_surrounding_frames() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(4.0, 3.0, "MOVING_UP"),
            TraceFrame::new(6.0, 3.0, "DOOR_OPENING"),
            TraceFrame::new(10.0, 1.0, "MOVING_DOWN"),
        ]);
        assert_eq!(sample_position(&trace, 2.0), 2.0);
        assert_eq!(sample_position(&trace, 5.0), 3.0);
        assert_eq!(sample_position(&trace, 8.0), 2.0);
    }

    #[test]
    fn duplicated_timestamp_jumps_to_later_frame() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(5.0, 2.0, "MOVING_UP"),
            TraceFrame::new(5.0, 4.0, "DOOR_OPENING"),
            TraceFrame::new(10.0, 4.0, "DOOR_OPEN"),
        ]);
        assert_eq!(sample_discrete(&trace, 5.0).unwrap().state_id, "DOOR_OPENING");
        assert_eq!(sample_position(&trace, 5.0), 4.0);
        assert_eq!(sample_position(&trace, 7.5), 4.0);
    }

    #[test]
    fn discrete_fields_step_hold() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(5.0, 1.0, "MOVING_UP"),
        ]);
        assert_eq!(sample_discrete(&trace, 4.0).unwrap().state_id, "IDLE_CLOSED");
        assert_eq!(sample_discrete(&trace, 4.999).unwrap().state_id, "IDLE_CLOSED");
        assert_eq!(sample_discrete(&trace, 5.0).unwrap().state_id, "MOVING_UP");
        assert_eq!(sample_discrete(&trace, 50.0).unwrap().state_id, "MOVING_UP");
    }

    #[test]
    fn discrete_before_trace_falls_back_to_first_frame() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(3.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(5.0, 1.0, "MOVING_UP"),
        ]);
        assert_eq!(sample_discrete(&trace, 0.0).unwrap().state_id, "IDLE_CLOSED");
    }
}
