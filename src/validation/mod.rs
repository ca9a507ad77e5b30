//! Structural and legality checks for lift FSM graphs.
//!
//! Checks accumulate with Stillwater's `Validation` so one pass reports
//! every problem instead of stopping at the first.
//!
//! - [`validate`]: the blocking checks; an empty result means the graph
//!   may be submitted
//! - [`lint`]: advisory warnings that never block submission
//! - [`submit`]: hands out the document only when [`validate`] is clean
//!
//! # Example
//!
//! ```rust
//! use liftstate::fsm::{FsmGraph, StatePatch, TransitionPatch};
//! use liftstate::validation::{messages, validate};
//!
//! let graph = FsmGraph::new()
//!     .add_state()
//!     .update_state(0, &StatePatch::new().id("IDLE_CLOSED"))
//!     .add_state()
//!     .update_state(1, &StatePatch::new().id("DOOR_OPEN"))
//!     .add_transition()
//!     .update_transition(0, &TransitionPatch::new().to_state("DOOR_OPEN"));
//!
//! assert_eq!(
//!     messages(&validate(&graph)),
//!     vec!["Forbidden transition IDLE_CLOSED → DOOR_OPEN."]
//! );
//! ```

mod finding;
mod lint;
mod rules;

pub use finding::{Endpoint, Finding, Severity};
pub use lint::lint;
pub use rules::validate;

use crate::fsm::{FsmDocument, FsmGraph};
use thiserror::Error;
use tracing::{debug, info};

/// Returned by [`submit`] when the graph still has findings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("FSM has {} validation finding(s)", .findings.len())]
    Invalid { findings: Vec<Finding> },
}

/// Render findings as user-facing text, in order.
pub fn messages(findings: &[Finding]) -> Vec<String> {
    findings.iter().map(ToString::to_string).collect()
}

/// Release the validated document for persistence, or every blocking
/// finding when there is at least one.
pub fn submit(graph: &FsmGraph) -> Result<FsmDocument, SubmitError> {
    let findings = validate(graph);
    if !findings.is_empty() {
        debug!(count = findings.len(), "submit blocked");
        return Err(SubmitError::Invalid { findings });
    }
    info!(
        states = graph.states().len(),
        transitions = graph.transitions().len(),
        "FSM submitted"
    );
    Ok(graph.document().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submit_returns_document_for_clean_graph() {
        let graph = FsmGraph::normalize(&json!({
            "states": [
                {"id": "IDLE_CLOSED", "name": "Idle", "is_initial": true},
                {"id": "MOVING_UP", "name": "Up"}
            ],
            "transitions": [
                {"id": "t1", "from_state_id": "IDLE_CLOSED", "to_state_id": "MOVING_UP"}
            ]
        }));

        let doc = submit(&graph).unwrap();
        assert_eq!(&doc, graph.document());
    }

    #[test]
    fn submit_reports_findings_for_invalid_graph() {
        let err = submit(&FsmGraph::new()).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Invalid {
                findings: vec![Finding::NoStates]
            }
        );
        assert_eq!(err.to_string(), "FSM has 1 validation finding(s)");
    }
}
