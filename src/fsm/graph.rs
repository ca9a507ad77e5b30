//! Editable FSM graph.

use super::document::{FsmDocument, StateNode, TransitionEdge};
use super::patch::{StatePatch, TransitionPatch};
use serde_json::Value;
use tracing::debug;

/// Display name given to freshly added states.
pub const NEW_STATE_NAME: &str = "New state";

/// Ordered states and transitions of one lift FSM.
///
/// Every edit is pure: it leaves `self` untouched and returns the updated
/// graph. Out-of-range indices return an unchanged copy. The only
/// invariant enforced on write is that at most one state is initial once
/// a patch sets `is_initial = true`; all other rules are reported by
/// [`crate::validation::validate`].
///
/// # Example
///
/// ```rust
/// use liftstate::fsm::{FsmGraph, StatePatch};
///
/// let graph = FsmGraph::new().add_state().add_state();
/// assert!(graph.states()[0].is_initial);
///
/// let graph = graph.update_state(1, &StatePatch::new().initial(true));
/// assert!(!graph.states()[0].is_initial);
/// assert!(graph.states()[1].is_initial);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FsmGraph {
    doc: FsmDocument,
}

impl FsmGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from any JSON value; never fails.
    pub fn normalize(raw: &Value) -> Self {
        Self {
            doc: FsmDocument::normalize(raw),
        }
    }

    /// Parse JSON text and normalize it. Only text that is not JSON fails.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(Self::normalize(&raw))
    }

    pub fn kind(&self) -> &str {
        &self.doc.kind
    }

    pub fn states(&self) -> &[StateNode] {
        &self.doc.states
    }

    pub fn transitions(&self) -> &[TransitionEdge] {
        &self.doc.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.doc.states.is_empty()
    }

    pub fn initial_count(&self) -> usize {
        self.doc.states.iter().filter(|s| s.is_initial).count()
    }

    /// Ready to run: exactly one initial state.
    pub fn is_ready(&self) -> bool {
        self.initial_count() == 1
    }

    pub fn document(&self) -> &FsmDocument {
        &self.doc
    }

    pub fn into_document(self) -> FsmDocument {
        self.doc
    }

    /// Serialize to the wire shape accepted by [`FsmGraph::normalize`].
    pub fn to_value(&self) -> Value {
        self.doc.to_value()
    }

    /// Append a state. It becomes initial only when the graph was empty.
    pub fn add_state(&self) -> Self {
        let mut next = self.clone();
        let id = unused_id('s', next.doc.states.iter().map(|s| s.id.as_str()));
        let is_initial = next.doc.states.is_empty();
        debug!(state_id = %id, is_initial, "adding state");
        next.doc.states.push(StateNode {
            id,
            name: NEW_STATE_NAME.to_string(),
            is_initial,
            is_final: false,
        });
        next
    }

    /// Apply `patch` to the state at `index`. Claiming `is_initial` clears
    /// the flag on every other state in the same edit.
    pub fn update_state(&self, index: usize, patch: &StatePatch) -> Self {
        let mut next = self.clone();
        let Some(node) = next.doc.states.get_mut(index) else {
            debug!(index, "update_state: index out of range");
            return next;
        };
        patch.apply(node);

        if patch.claims_initial() {
            for (i, other) in next.doc.states.iter_mut().enumerate() {
                if i != index {
                    other.is_initial = false;
                }
            }
        }
        debug!(index, ?patch, "updated state");
        next
    }

    /// Remove the state at `index` along with every transition that starts
    /// or ends at its identifier.
    pub fn delete_state(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index >= next.doc.states.len() {
            debug!(index, "delete_state: index out of range");
            return next;
        }
        let removed = next.doc.states.remove(index);
        let before = next.doc.transitions.len();
        next.doc
            .transitions
            .retain(|t| t.from_state_id != removed.id && t.to_state_id != removed.id);
        debug!(
            state_id = %removed.id,
            cascaded = before - next.doc.transitions.len(),
            "deleted state"
        );
        next
    }

    /// Append a transition looping on the first state (or with empty
    /// endpoints when there are no states) and an empty condition.
    pub fn add_transition(&self) -> Self {
        let mut next = self.clone();
        let id = unused_id('t', next.doc.transitions.iter().map(|t| t.id.as_str()));
        let endpoint = next
            .doc
            .states
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_default();
        debug!(transition_id = %id, endpoint = %endpoint, "adding transition");
        next.doc.transitions.push(TransitionEdge {
            id,
            from_state_id: endpoint.clone(),
            to_state_id: endpoint,
            condition: String::new(),
        });
        next
    }

    pub fn update_transition(&self, index: usize, patch: &TransitionPatch) -> Self {
        let mut next = self.clone();
        match next.doc.transitions.get_mut(index) {
            Some(edge) => {
                patch.apply(edge);
                debug!(index, ?patch, "updated transition");
            }
            None => debug!(index, "update_transition: index out of range"),
        }
        next
    }

    pub fn delete_transition(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.doc.transitions.len() {
            let removed = next.doc.transitions.remove(index);
            debug!(transition_id = %removed.id, "deleted transition");
        } else {
            debug!(index, "delete_transition: index out of range");
        }
        next
    }
}

/// First `<prefix><n>` not already taken, starting at `len + 1`.
fn unused_id<'a>(prefix: char, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut n = taken.clone().count() + 1;
    loop {
        let candidate = format!("{prefix}{n}");
        if !taken.clone().any(|id| id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

impl From<FsmDocument> for FsmGraph {
    fn from(doc: FsmDocument) -> Self {
        Self { doc }
    }
}
