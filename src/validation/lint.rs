//! Advisory checks that never block submission.

use super::finding::Finding;
use super::rules::{collect, Check};
use crate::catalog::LiftState;
use crate::fsm::{Condition, FsmGraph};
use std::collections::{BTreeSet, HashSet};
use stillwater::validation::Validation;
use tracing::debug;

/// Warnings about a graph: states unreachable from the initial state,
/// identifiers outside the lift catalog, and conditions naming signals the
/// simulator never raises.
pub fn lint(graph: &FsmGraph) -> Vec<Finding> {
    let mut checks: Vec<Check> = Vec::new();

    let mut reported = HashSet::new();
    for state in graph.states() {
        let id = state.id.trim();
        if !id.is_empty() && LiftState::from_id(id).is_none() && reported.insert(id) {
            checks.push(Validation::fail(Finding::UnknownState { id: id.to_string() }));
        }
    }

    for t in graph.transitions() {
        if !Condition::parse(&t.condition).is_supported() {
            checks.push(Validation::fail(Finding::UnsupportedCondition {
                transition: t.id.clone(),
                condition: t.condition.clone(),
            }));
        }
    }

    let unreachable = unreachable_states(graph);
    if !unreachable.is_empty() {
        checks.push(Validation::fail(Finding::UnreachableStates {
            states: unreachable,
        }));
    }

    let findings = collect(checks);
    debug!(warnings = findings.len(), "lint finished");
    findings
}

/// States no transition path reaches from the initial state, sorted.
/// Empty unless the graph has exactly one initial state.
fn unreachable_states(graph: &FsmGraph) -> Vec<String> {
    if graph.initial_count() != 1 {
        return Vec::new();
    }
    let mut reachable: HashSet<&str> = graph
        .states()
        .iter()
        .filter(|s| s.is_initial)
        .map(|s| s.id.trim())
        .collect();

    let mut changed = true;
    while changed {
        changed = false;
        for t in graph.transitions() {
            if reachable.contains(t.from_state_id.trim()) && reachable.insert(t.to_state_id.trim())
            {
                changed = true;
            }
        }
    }

    graph
        .states()
        .iter()
        .map(|s| s.id.trim())
        .filter(|id| !id.is_empty() && !reachable.contains(id))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
