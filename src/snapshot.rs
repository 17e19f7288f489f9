// Flat-state export/restore for lifecycle survival

use crate::ids::TaskId;
use crate::models::Task;
use eyre::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Snapshot format version understood by this build
pub const SNAPSHOT_VERSION: u32 = 1;

/// Flat representation of the full store state
///
/// The contract is an exact round trip: same ids, labels, done flags,
/// order, and draft text. The version field gates future format changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub tasks: Vec<Task>,
    pub draft: String,
}

/// Failure to rebuild a store from a flat representation
///
/// Restoration is the one boundary where malformed data can arrive from
/// outside the process, so it fails fast instead of no-opping.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The payload does not decode to the snapshot shape
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The version field is not one this build understands
    #[error("unsupported snapshot version {0} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion(u32),

    /// The snapshot would violate id uniqueness in the collection
    #[error("duplicate task id {0} in snapshot")]
    DuplicateId(TaskId),
}

impl Snapshot {
    /// Encode as a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode from a JSON string
    ///
    /// Only checks the shape; version and id uniqueness are checked when
    /// the snapshot is restored into a store.
    pub fn from_json(json: &str) -> Result<Self, RestoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write a snapshot to a state file, replacing any previous contents
///
/// Takes an exclusive lock for the duration of the write so overlapping
/// invocations cannot interleave a partial state file.
pub fn save_to_path(snapshot: &Snapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create state directory")?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .open(path)
        .context("Failed to open state file for writing")?;

    file.lock_exclusive().context("Failed to acquire file lock")?;

    let json = snapshot.to_json()?;
    file.set_len(0).context("Failed to truncate state file")?;
    writeln!(file, "{}", json)?;
    file.sync_all()?;

    debug!(file = ?path, tasks = snapshot.tasks.len(), "Saved snapshot");

    // Lock is released when file is dropped
    Ok(())
}

/// Load a snapshot from a state file
///
/// Returns `Ok(None)` when the file does not exist yet (first launch).
pub fn load_from_path(path: &Path) -> Result<Option<Snapshot>> {
    if !path.exists() {
        debug!(file = ?path, "No state file yet");
        return Ok(None);
    }

    let contents = fs::read_to_string(path).context("Failed to read state file")?;
    let snapshot = Snapshot::from_json(&contents).context("Failed to decode state file")?;

    debug!(file = ?path, tasks = snapshot.tasks.len(), "Loaded snapshot");
    Ok(Some(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{IdGenerator, SequentialIds};
    use tempfile::TempDir;

    fn snapshot_with_tasks() -> Snapshot {
        let mut ids = SequentialIds::default();
        Snapshot {
            version: SNAPSHOT_VERSION,
            tasks: vec![
                Task {
                    id: ids.next_id(),
                    label: "Buy milk".to_string(),
                    done: false,
                },
                Task {
                    id: ids.next_id(),
                    label: "Walk dog".to_string(),
                    done: true,
                },
            ],
            draft: "half-typed".to_string(),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = snapshot_with_tasks();
        let json = snapshot.to_json().unwrap();
        let back = Snapshot::from_json(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_json_shape() {
        let json = snapshot_with_tasks().to_json().unwrap();
        assert!(json.contains("\"version\":1"));
        assert!(json.contains("\"label\":\"Buy milk\""));
        assert!(json.contains("\"draft\":\"half-typed\""));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Snapshot::from_json("{not json"),
            Err(RestoreError::Malformed(_))
        ));
        // missing fields are malformed too
        assert!(matches!(
            Snapshot::from_json(r#"{"version":1}"#),
            Err(RestoreError::Malformed(_))
        ));
        // wrong field type
        assert!(matches!(
            Snapshot::from_json(r#"{"version":1,"tasks":[],"draft":7}"#),
            Err(RestoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state").join("tasks.json");

        let snapshot = snapshot_with_tasks();
        save_to_path(&snapshot, &path).unwrap();

        let loaded = load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");
        assert!(load_from_path(&path).unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        let big = snapshot_with_tasks();
        save_to_path(&big, &path).unwrap();

        let small = Snapshot {
            version: SNAPSHOT_VERSION,
            tasks: Vec::new(),
            draft: String::new(),
        };
        save_to_path(&small, &path).unwrap();

        let loaded = load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, small);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{malformed").unwrap();

        assert!(load_from_path(&path).is_err());
    }
}
