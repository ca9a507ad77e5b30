//! Wire document and tolerant normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind recorded when a document does not carry a string `type`.
pub const DEFAULT_FSM_KIND: &str = "mealy";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    pub id: String,
    pub name: String,
    pub is_initial: bool,
    pub is_final: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub id: String,
    pub from_state_id: String,
    pub to_state_id: String,
    /// Descriptive only; never evaluated.
    pub condition: String,
}

/// FSM description as exchanged with persistence collaborators:
/// `{ type, states: [...], transitions: [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub states: Vec<StateNode>,
    pub transitions: Vec<TransitionEdge>,
}

impl Default for FsmDocument {
    fn default() -> Self {
        Self {
            kind: DEFAULT_FSM_KIND.to_string(),
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

impl FsmDocument {
    /// Coerce an arbitrary JSON value into a document. Never fails: absent or
    /// ill-typed fields fall back to empty strings, `false`, or empty lists.
    pub fn normalize(raw: &Value) -> Self {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FSM_KIND)
            .to_string();

        let states = list(raw, "states")
            .map(|s| StateNode {
                id: text(s.get("id")),
                name: text(s.get("name")),
                is_initial: flag(s.get("is_initial")),
                is_final: flag(s.get("is_final")),
            })
            .collect();

        let transitions = list(raw, "transitions")
            .map(|t| TransitionEdge {
                id: text(t.get("id")),
                from_state_id: text(t.get("from_state_id")),
                to_state_id: text(t.get("to_state_id")),
                condition: text(t.get("condition")),
            })
            .collect();

        Self {
            kind,
            states,
            transitions,
        }
    }

    pub fn to_value(&self) -> Value {
        // A struct of strings, bools and vectors always maps to JSON.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn list<'a>(raw: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}

/// Scalars are stringified; anything else is treated as absent.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn flag(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}
