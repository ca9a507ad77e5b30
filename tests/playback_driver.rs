//! Frame-loop tests on tokio's paused clock.

use liftstate::catalog::LiftState;
use liftstate::playback::scheduler::drive;
use liftstate::playback::{
    ClockPhase, FrameScheduler, IntervalScheduler, ReplaySession, TickOutcome, TraceFrame,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn ride(duration: f64) -> Vec<TraceFrame> {
    vec![
        TraceFrame::new(0.0, 1.0, "IDLE_CLOSED"),
        TraceFrame::new(duration / 2.0, 2.0, "MOVING_UP"),
        TraceFrame::new(duration, 3.0, "DOOR_OPENING").with_doors_open(true),
    ]
}

#[tokio::test(start_paused = true)]
async fn loop_plays_trace_to_the_end() {
    let session = RefCell::new(ReplaySession::new());
    let mut frames = IntervalScheduler::new(FRAME);
    let started = tokio::time::Instant::now();
    let run = session.borrow_mut().load(Some(ride(1.0).as_slice()), frames.now());

    let outcome = drive(&session, run, &mut frames).await;

    assert_eq!(outcome, TickOutcome::Finished);
    assert!(started.elapsed() >= Duration::from_secs(1));
    let session = session.borrow();
    assert_eq!(session.state().phase, ClockPhase::Finished);
    assert_eq!(session.state().current_time, 1.0);
    let view = session.projection();
    assert_eq!(view.state_label, LiftState::DoorOpening.label());
    assert_eq!(view.position, 3.0);
    assert!(view.doors_open);
}

#[tokio::test(start_paused = true)]
async fn empty_trace_never_schedules_motion() {
    let session = RefCell::new(ReplaySession::new());
    let mut frames = IntervalScheduler::new(FRAME);
    let run = session.borrow_mut().load(Some(&[][..]), frames.now());

    assert_eq!(drive(&session, run, &mut frames).await, TickOutcome::Stopped);
    assert_eq!(session.borrow().state().phase, ClockPhase::Idle);
    assert_eq!(session.borrow().projection().state_label, "-");
}

#[tokio::test(start_paused = true)]
async fn new_trace_cancels_the_running_loop() {
    let session = RefCell::new(ReplaySession::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session
        .borrow_mut()
        .clock_mut()
        .subscribe(move |s| sink.borrow_mut().push(s.current_time));

    let mut old_frames = IntervalScheduler::new(FRAME);
    let mut new_frames = IntervalScheduler::new(FRAME);
    let first = session.borrow_mut().load(Some(ride(10.0).as_slice()), old_frames.now());

    let (old, new) = tokio::join!(drive(&session, first, &mut old_frames), async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = session.borrow_mut().load(Some(ride(2.0).as_slice()), new_frames.now());
        drive(&session, second, &mut new_frames).await
    });

    assert_eq!(old, TickOutcome::Cancelled);
    assert_eq!(new, TickOutcome::Finished);
    assert_eq!(session.borrow().state().current_time, 2.0);

    // Time drops exactly once, back to 0 on reload, and never regresses after.
    let seen = seen.borrow();
    let drops: Vec<usize> = seen
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] < w[0])
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(drops.len(), 1);
    assert_eq!(seen[drops[0]], 0.0);
    assert!(seen[..drops[0]].iter().all(|t| *t <= 0.6));
    assert_eq!(seen.last(), Some(&2.0));
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_the_loop_between_frames() {
    let session = RefCell::new(ReplaySession::new());
    let mut frames = IntervalScheduler::new(FRAME);
    let run = session.borrow_mut().load(Some(ride(5.0).as_slice()), frames.now());

    let (outcome, ()) = tokio::join!(drive(&session, run, &mut frames), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        session.borrow_mut().cancel();
    });

    assert_eq!(outcome, TickOutcome::Cancelled);
    assert_eq!(session.borrow().state().phase, ClockPhase::Idle);
    assert_eq!(session.borrow().state().current_time, 0.0);
}
