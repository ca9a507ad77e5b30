//! Typed partial updates for states and transitions.

use super::document::{StateNode, TransitionEdge};

/// Subset of [`StateNode`] fields to overwrite. `None` leaves a field as is.
///
/// # Example
///
/// ```rust
/// use liftstate::fsm::StatePatch;
///
/// let patch = StatePatch::new().id("DOOR_OPEN").initial(true);
/// assert_eq!(patch.is_initial, Some(true));
/// assert!(patch.name.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_initial: Option<bool>,
    pub is_final: Option<bool>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn initial(mut self, is_initial: bool) -> Self {
        self.is_initial = Some(is_initial);
        self
    }

    pub fn final_state(mut self, is_final: bool) -> Self {
        self.is_final = Some(is_final);
        self
    }

    /// Whether applying this patch must clear the flag on every other state.
    pub(crate) fn claims_initial(&self) -> bool {
        self.is_initial == Some(true)
    }

    pub(crate) fn apply(&self, node: &mut StateNode) {
        if let Some(id) = &self.id {
            node.id.clone_from(id);
        }
        if let Some(name) = &self.name {
            node.name.clone_from(name);
        }
        if let Some(is_initial) = self.is_initial {
            node.is_initial = is_initial;
        }
        if let Some(is_final) = self.is_final {
            node.is_final = is_final;
        }
    }
}

/// Subset of [`TransitionEdge`] fields to overwrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionPatch {
    pub id: Option<String>,
    pub from_state_id: Option<String>,
    pub to_state_id: Option<String>,
    pub condition: Option<String>,
}

impl TransitionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn from_state(mut self, state_id: impl Into<String>) -> Self {
        self.from_state_id = Some(state_id.into());
        self
    }

    pub fn to_state(mut self, state_id: impl Into<String>) -> Self {
        self.to_state_id = Some(state_id.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub(crate) fn apply(&self, edge: &mut TransitionEdge) {
        if let Some(id) = &self.id {
            edge.id.clone_from(id);
        }
        if let Some(from) = &self.from_state_id {
            edge.from_state_id.clone_from(from);
        }
        if let Some(to) = &self.to_state_id {
            edge.to_state_id.clone_from(to);
        }
        if let Some(condition) = &self.condition {
            edge.condition.clone_from(condition);
        }
    }
}
