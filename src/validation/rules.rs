//! Blocking validation rules.

use super::finding::{Endpoint, Finding};
use crate::catalog::{allowed_next, LiftState};
use crate::fsm::{FsmGraph, StateNode, TransitionEdge};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

pub(crate) type Check = Validation<(), NonEmptyVec<Finding>>;

/// Run every blocking check against `graph` and return the findings in
/// check order. An empty graph yields only [`Finding::NoStates`]; otherwise
/// no check suppresses another.
///
/// Identifiers are compared after trimming surrounding whitespace.
pub fn validate(graph: &FsmGraph) -> Vec<Finding> {
    let states = graph.states();
    if states.is_empty() {
        debug!("validation: graph has no states");
        return vec![Finding::NoStates];
    }
    let transitions = graph.transitions();

    let mut checks: Vec<Check> = Vec::new();
    check_state_ids(states, &mut checks);
    check_initial_state(states, &mut checks);
    check_transition_ids(transitions, &mut checks);

    let known: HashSet<&str> = states.iter().map(|s| s.id.trim()).collect();
    check_references(transitions, &known, &mut checks);
    check_legality(transitions, &known, &mut checks);

    let findings = collect(checks);
    debug!(
        states = states.len(),
        transitions = transitions.len(),
        findings = findings.len(),
        "validation finished"
    );
    findings
}

/// Flatten accumulated checks into an ordered finding list.
pub(crate) fn collect(checks: Vec<Check>) -> Vec<Finding> {
    if checks.is_empty() {
        return Vec::new();
    }
    match Validation::all_vec(checks) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn check_state_ids(states: &[StateNode], checks: &mut Vec<Check>) {
    if states.iter().any(|s| s.id.trim().is_empty()) {
        checks.push(Validation::fail(Finding::EmptyStateId));
    }
    for id in duplicated(states.iter().map(|s| s.id.trim())) {
        checks.push(Validation::fail(Finding::DuplicateStateId { id }));
    }
}

fn check_initial_state(states: &[StateNode], checks: &mut Vec<Check>) {
    match states.iter().filter(|s| s.is_initial).count() {
        0 => checks.push(Validation::fail(Finding::NoInitialState)),
        1 => {}
        count => checks.push(Validation::fail(Finding::MultipleInitialStates { count })),
    }
}

fn check_transition_ids(transitions: &[TransitionEdge], checks: &mut Vec<Check>) {
    if transitions.iter().any(|t| t.id.trim().is_empty()) {
        checks.push(Validation::fail(Finding::EmptyTransitionId));
    }
    for id in duplicated(transitions.iter().map(|t| t.id.trim())) {
        checks.push(Validation::fail(Finding::DuplicateTransitionId { id }));
    }
}

fn check_references(
    transitions: &[TransitionEdge],
    known: &HashSet<&str>,
    checks: &mut Vec<Check>,
) {
    for t in transitions {
        for (side, state) in [
            (Endpoint::Source, &t.from_state_id),
            (Endpoint::Destination, &t.to_state_id),
        ] {
            if !known.contains(state.trim()) {
                checks.push(Validation::fail(Finding::DanglingReference {
                    transition: t.id.clone(),
                    side,
                    state: state.clone(),
                }));
            }
        }
    }
}

fn check_legality(
    transitions: &[TransitionEdge],
    known: &HashSet<&str>,
    checks: &mut Vec<Check>,
) {
    for t in transitions {
        let from = t.from_state_id.trim();
        let to = t.to_state_id.trim();
        if from.is_empty() || to.is_empty() || !known.contains(from) || !known.contains(to) {
            continue;
        }

        let Some(allowed) = allowed_next(from) else {
            checks.push(Validation::fail(Finding::NoOutgoingTransitions {
                transition: t.id.clone(),
                state: from.to_string(),
            }));
            continue;
        };

        let permitted = LiftState::from_id(to).is_some_and(|dest| allowed.contains(&dest));
        if !permitted {
            checks.push(Validation::fail(Finding::ForbiddenTransition {
                transition: t.id.clone(),
                from: from.to_string(),
                to: to.to_string(),
            }));
        }
    }
}

/// Non-empty identifiers seen more than once, each reported once, in the
/// order their second occurrence appears.
fn duplicated<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for id in ids.filter(|id| !id.is_empty()) {
        if !seen.insert(id) && reported.insert(id) {
            dups.push(id.to_string());
        }
    }
    dups
}
