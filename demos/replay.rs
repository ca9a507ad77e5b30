//! Lift Replay
//!
//! This demo authors a small lift controller, checks it, then replays a
//! simulated ride frame by frame.
//!
//! Key concepts:
//! - Editing an FSM through typed edits and reading accumulated findings
//! - Advisory lint warnings that never block a commit
//! - Snapshotting the edited document
//! - Driving a replay session from a tokio interval
//!
//! Run with: RUST_LOG=liftstate=debug cargo run --example replay

use liftstate::config::ReplayConfig;
use liftstate::fsm::{Edit, FsmEditor, StatePatch, TransitionPatch};
use liftstate::playback::scheduler::drive;
use liftstate::playback::{FrameScheduler, IntervalScheduler, ReplaySession, TraceFrame};
use liftstate::projector::{cabin_offset_px, project_at};
use liftstate::snapshot::EditorSnapshot;
use liftstate::validation::messages;
use std::cell::RefCell;
use tracing_subscriber::EnvFilter;

const TRACE: &str = r#"[
    {"time": 0.0, "floor": 1, "state_id": "IDLE_CLOSED", "doors_open": false, "direction": "none"},
    {"time": 0.4, "floor": 1, "state_id": "MOVING_UP", "doors_open": false, "direction": "up"},
    {"time": 1.6, "floor": 3, "state_id": "DOOR_OPENING", "doors_open": false, "direction": "none"},
    {"time": 2.0, "floor": 3, "state_id": "DOOR_OPEN", "doors_open": true, "direction": "none"}
]"#;

fn author() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Authoring ===\n");

    let mut editor = FsmEditor::load(&serde_json::json!({ "type": "mealy" }));
    for _ in 0..3 {
        editor.apply(Edit::AddState);
    }
    for (index, id) in ["IDLE_CLOSED", "MOVING_UP", "DOOR_OPEN"].into_iter().enumerate() {
        editor.apply(Edit::UpdateState {
            index,
            patch: StatePatch::new().id(id).name(id.to_lowercase()),
        });
    }
    editor.apply(Edit::AddTransition);
    editor.apply(Edit::UpdateTransition {
        index: 0,
        patch: TransitionPatch::new()
            .to_state("MOVING_UP")
            .condition("call_received"),
    });
    editor.apply(Edit::AddTransition);
    editor.apply(Edit::UpdateTransition {
        index: 1,
        patch: TransitionPatch::new()
            .from_state("MOVING_UP")
            .to_state("DOOR_OPEN")
            .condition("arrived_at_floor"),
    });

    for warning in editor.warnings() {
        println!("  warning: {warning}");
    }
    match editor.submit() {
        Ok(_) => println!("  committed"),
        Err(err) => {
            println!("  {err}");
            for line in messages(editor.visible_findings()) {
                println!("    - {line}");
            }
        }
    }

    editor.apply(Edit::UpdateState {
        index: 2,
        patch: StatePatch::new().id("DOOR_OPENING"),
    });
    editor.apply(Edit::UpdateTransition {
        index: 1,
        patch: TransitionPatch::new().to_state("DOOR_OPENING"),
    });
    let document = editor.submit()?;
    println!(
        "  committed after fix: {} states, {} transitions",
        document.states.len(),
        document.transitions.len()
    );

    let snapshot = EditorSnapshot::capture(editor.graph());
    let bytes = snapshot.to_bytes()?;
    let restored = EditorSnapshot::from_bytes(&bytes)?.restore();
    println!(
        "  snapshot {} ({} bytes) restores equal: {}",
        snapshot.id,
        bytes.len(),
        &restored == editor.graph()
    );
    Ok(())
}

async fn replay() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Replay ===\n");

    let config = ReplayConfig::default();
    let frames = TraceFrame::list_from_json(TRACE)?;
    let session = RefCell::new(ReplaySession::new());
    let mut scheduler = IntervalScheduler::from_config(&config);

    let run = session.borrow_mut().load(Some(frames.as_slice()), scheduler.now());
    let outcome = drive(&session, run, &mut scheduler).await;

    let session = session.borrow();
    for t in [0.0, 0.5, 1.0, 1.6, 2.0] {
        let view = project_at(session.trace(), t);
        println!(
            "  t={t:>3.1}s floor={:>4.2} top={:>5.1}px doors={} dir={} {}",
            view.position,
            cabin_offset_px(view.position, &config),
            if view.doors_open { "open  " } else { "closed" },
            view.direction_label,
            view.state_label,
        );
    }
    println!("\n  playback ended: {outcome:?}");
    println!("  path: {}", session.trace().state_path().join(" -> "));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("liftstate=info")),
        )
        .init();

    author()?;
    replay().await
}
