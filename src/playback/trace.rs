//! Canonical, time-sorted traces.

use super::frame::TraceFrame;
use serde::Serialize;
use tracing::{debug, warn};

/// Frames sorted ascending by time plus the trace duration.
///
/// Built in full from a raw frame list and never edited afterwards. The
/// input slice is copied, never reordered in place.
///
/// # Example
///
/// ```rust
/// use liftstate::playback::{CanonicalTrace, TraceFrame};
///
/// let raw = vec![
///     TraceFrame::new(6.0, 3.0, "DOOR_OPENING"),
///     TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
///     TraceFrame::new(2.0, 1.0, "MOVING_UP"),
/// ];
/// let trace = CanonicalTrace::from_frames(&raw);
///
/// assert_eq!(trace.duration(), 6.0);
/// assert_eq!(trace.state_path(), vec!["IDLE_CLOSED", "MOVING_UP", "DOOR_OPENING"]);
/// assert_eq!(raw[0].time, 6.0); // input untouched
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CanonicalTrace {
    frames: Vec<TraceFrame>,
    duration: f64,
}

impl CanonicalTrace {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Missing and empty inputs both give an empty trace of duration 0.
    pub fn normalize(raw: Option<&[TraceFrame]>) -> Self {
        let Some(raw) = raw.filter(|frames| !frames.is_empty()) else {
            return Self::empty();
        };

        let mut frames: Vec<TraceFrame> = raw
            .iter()
            .filter(|f| {
                let finite = f.time.is_finite();
                if !finite {
                    warn!(time = f.time, state_id = %f.state_id, "dropping frame without a finite time");
                }
                finite
            })
            .cloned()
            .collect();
        // Stable: frames sharing a timestamp keep their input order.
        frames.sort_by(|a, b| a.time.total_cmp(&b.time));

        let duration = frames.last().map_or(0.0, |f| f.time);
        debug!(frames = frames.len(), duration, "trace normalized");
        Self { frames, duration }
    }

    pub fn from_frames(raw: &[TraceFrame]) -> Self {
        Self::normalize(Some(raw))
    }

    pub fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }

    /// Time of the last frame; 0 for an empty trace.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether playback has anything to animate.
    pub fn is_animatable(&self) -> bool {
        !self.frames.is_empty() && self.duration > 0.0
    }

    /// State identifiers in visiting order, collapsing consecutive repeats.
    pub fn state_path(&self) -> Vec<&str> {
        let mut path: Vec<&str> = Vec::new();
        for frame in &self.frames {
            if path.last() != Some(&frame.state_id.as_str()) {
                path.push(&frame.state_id);
            }
        }
        path
    }

    /// Share of the trace elapsed at `t`, as a percentage in `[0, 100]`.
    pub fn progress(&self, t: f64) -> f64 {
        if self.duration <= 0.0 || t.is_nan() {
            return 0.0;
        }
        (t / self.duration * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_input_is_empty_trace() {
        for trace in [
            CanonicalTrace::normalize(None),
            CanonicalTrace::normalize(Some(&[][..])),
        ] {
            assert!(trace.is_empty());
            assert_eq!(trace.duration(), 0.0);
            assert!(!trace.is_animatable());
        }
    }

    #[test]
    fn sorts_by_time() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(5.0, 2.0, "B"),
            TraceFrame::new(1.0, 1.0, "A"),
            TraceFrame::new(9.0, 3.0, "C"),
        ]);
        let times: Vec<f64> = trace.frames().iter().map(|f| f.time).collect();
        assert_eq!(times, vec![1.0, 5.0, 9.0]);
        assert_eq!(trace.duration(), 9.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(3.0, 1.0, "second"),
            TraceFrame::new(1.0, 1.0, "first"),
            TraceFrame::new(3.0, 1.0, "third"),
        ]);
        let ids: Vec<&str> = trace.frames().iter().map(|f| f.state_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let frame = TraceFrame::new(2.0, 1.0, "IDLE_CLOSED");
        let trace = CanonicalTrace::from_frames(&[frame.clone(), frame]);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn non_finite_times_are_dropped() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(f64::NAN, 1.0, "A"),
            TraceFrame::new(2.0, 1.0, "B"),
            TraceFrame::new(f64::INFINITY, 1.0, "C"),
        ]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.duration(), 2.0);
    }

    #[test]
    fn single_frame_at_zero_is_not_animatable() {
        let trace = CanonicalTrace::from_frames(&[TraceFrame::new(0.0, 1.0, "IDLE_CLOSED")]);
        assert!(!trace.is_empty());
        assert!(!trace.is_animatable());
    }

    #[test]
    fn progress_is_clamped_percentage() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 1.0, "A"),
            TraceFrame::new(8.0, 2.0, "B"),
        ]);
        assert_eq!(trace.progress(2.0), 25.0);
        assert_eq!(trace.progress(-1.0), 0.0);
        assert_eq!(trace.progress(20.0), 100.0);
        assert_eq!(CanonicalTrace::empty().progress(3.0), 0.0);
    }

    #[test]
    fn state_path_collapses_repeats() {
        let trace = CanonicalTrace::from_frames(&[
            TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(1.0, 1.0, "IDLE_CLOSED"),
            TraceFrame::new(2.0, 2.0, "MOVING_UP"),
            TraceFrame::new(3.0, 3.0, "IDLE_CLOSED"),
        ]);
        assert_eq!(
            trace.state_path(),
            vec!["IDLE_CLOSED", "MOVING_UP", "IDLE_CLOSED"]
        );
    }
}
