//! One FSM editing session.
//!
//! The editor owns a single graph and recomputes findings from scratch
//! after every edit. Findings stay hidden until the user has touched the
//! graph or tried to submit it.

use super::document::FsmDocument;
use super::graph::FsmGraph;
use super::patch::{StatePatch, TransitionPatch};
use crate::validation::{self, Finding, SubmitError};
use serde_json::Value;
use tracing::debug;

/// A single mutation of the edited graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    AddState,
    UpdateState { index: usize, patch: StatePatch },
    DeleteState { index: usize },
    AddTransition,
    UpdateTransition { index: usize, patch: TransitionPatch },
    DeleteTransition { index: usize },
}

impl Edit {
    /// Apply this edit to `graph`, returning the edited copy.
    pub fn apply(&self, graph: &FsmGraph) -> FsmGraph {
        match self {
            Self::AddState => graph.add_state(),
            Self::UpdateState { index, patch } => graph.update_state(*index, patch),
            Self::DeleteState { index } => graph.delete_state(*index),
            Self::AddTransition => graph.add_transition(),
            Self::UpdateTransition { index, patch } => graph.update_transition(*index, patch),
            Self::DeleteTransition { index } => graph.delete_transition(*index),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FsmEditor {
    graph: FsmGraph,
    findings: Vec<Finding>,
    touched: bool,
}

impl FsmEditor {
    /// Start a session from an external document of any shape.
    pub fn load(raw: &Value) -> Self {
        let mut editor = Self::default();
        editor.reset(raw);
        editor
    }

    /// Replace the edited graph with a freshly supplied document, clearing
    /// findings and the touched flag.
    pub fn reset(&mut self, raw: &Value) {
        self.graph = FsmGraph::normalize(raw);
        self.findings.clear();
        self.touched = false;
        debug!(states = self.graph.states().len(), "editor reset");
    }

    pub fn apply(&mut self, edit: Edit) -> &FsmGraph {
        self.graph = edit.apply(&self.graph);
        self.findings = validation::validate(&self.graph);
        self.touched = true;
        debug!(?edit, findings = self.findings.len(), "edit applied");
        &self.graph
    }

    pub fn graph(&self) -> &FsmGraph {
        &self.graph
    }

    /// Current blocking findings, whether or not they are shown yet.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings to show: none until the graph has been touched.
    pub fn visible_findings(&self) -> &[Finding] {
        if self.touched {
            &self.findings
        } else {
            &[]
        }
    }

    /// Advisory warnings for the current graph.
    pub fn warnings(&self) -> Vec<Finding> {
        validation::lint(&self.graph)
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Mark the session touched and release the document if it is valid.
    pub fn submit(&mut self) -> Result<FsmDocument, SubmitError> {
        self.touched = true;
        let result = validation::submit(&self.graph);
        self.findings = match &result {
            Ok(_) => Vec::new(),
            Err(SubmitError::Invalid { findings }) => findings.clone(),
        };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loading_clears_findings_and_touched() {
        let editor = FsmEditor::load(&json!({}));
        assert!(editor.findings().is_empty());
        assert!(editor.visible_findings().is_empty());
        assert!(!editor.is_touched());
    }

    #[test]
    fn edits_revalidate_and_reveal_findings() {
        let mut editor = FsmEditor::load(&json!({}));
        editor.apply(Edit::AddState);
        assert!(editor.is_touched());
        assert!(editor.visible_findings().is_empty());

        editor.apply(Edit::UpdateState {
            index: 0,
            patch: StatePatch::new().initial(false),
        });
        assert_eq!(editor.visible_findings(), &[Finding::NoInitialState]);
    }

    #[test]
    fn submit_reveals_findings_even_without_edits() {
        let mut editor = FsmEditor::load(&json!({"states": []}));
        assert!(editor.submit().is_err());
        assert_eq!(editor.visible_findings(), &[Finding::NoStates]);
    }

    #[test]
    fn submit_returns_edited_document() {
        let mut editor = FsmEditor::load(&json!({}));
        editor.apply(Edit::AddState);
        editor.apply(Edit::UpdateState {
            index: 0,
            patch: StatePatch::new().id("IDLE_CLOSED").name("Idle"),
        });
        let doc = editor.submit().unwrap();
        assert_eq!(doc.states[0].id, "IDLE_CLOSED");
        assert!(doc.states[0].is_initial);
    }

    #[test]
    fn reset_discards_touched_state() {
        let mut editor = FsmEditor::load(&json!({}));
        editor.apply(Edit::AddTransition);
        editor.reset(&json!({"states": [{"id": "IDLE_CLOSED", "is_initial": true}]}));
        assert!(!editor.is_touched());
        assert!(editor.findings().is_empty());
        assert_eq!(editor.warnings(), Vec::new());
    }
}
