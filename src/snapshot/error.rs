//! Snapshot error types.

use thiserror::Error;

/// Errors raised while saving or loading an editor snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Encoding the snapshot as JSON or bincode failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The input was not a well-formed JSON or bincode snapshot
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The snapshot was written by a format version this build cannot read
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
