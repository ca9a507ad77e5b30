//! Versioned snapshots of an FSM being edited.
//!
//! A snapshot caches the editor's document between sessions, either as JSON
//! or as compact bincode. Restoring runs the document back through tolerant
//! normalization, so a snapshot never yields a graph that `normalize` could
//! not have produced.

use crate::fsm::{FsmDocument, FsmGraph};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub version: u32,
    /// Unique snapshot identifier.
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub document: FsmDocument,
}

impl EditorSnapshot {
    pub fn capture(graph: &FsmGraph) -> Self {
        let snapshot = Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            document: graph.document().clone(),
        };
        debug!(
            id = %snapshot.id,
            states = graph.states().len(),
            transitions = graph.transitions().len(),
            "snapshot captured"
        );
        snapshot
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(text)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    /// Rebuild the editable graph.
    pub fn restore(&self) -> FsmGraph {
        FsmGraph::normalize(&self.document.to_value())
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
